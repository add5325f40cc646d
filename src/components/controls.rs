use crate::utils::errors::SimError;
use serde::{Deserialize, Serialize};

/// Normalized pilot (or autopilot) commands, produced fresh every frame.
/// Read-only to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlInputs {
    // Primary flight controls
    pub aileron: f64,  // [-1, 1]
    pub elevator: f64, // [-1, 1]
    pub rudder: f64,   // [-1, 1]
    pub throttle: f64, // [0, 1]

    // Secondary controls
    pub flaps: f64,  // [0, 1]
    pub brakes: f64, // [0, 1]
}

impl ControlInputs {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(-1.0..=1.0).contains(&self.aileron) {
            return Err(SimError::InvalidControl("aileron out of bounds".into()));
        }
        if !(-1.0..=1.0).contains(&self.elevator) {
            return Err(SimError::InvalidControl("elevator out of bounds".into()));
        }
        if !(-1.0..=1.0).contains(&self.rudder) {
            return Err(SimError::InvalidControl("rudder out of bounds".into()));
        }
        if !(0.0..=1.0).contains(&self.throttle) {
            return Err(SimError::InvalidControl("throttle out of bounds".into()));
        }
        if !(0.0..=1.0).contains(&self.flaps) {
            return Err(SimError::InvalidControl("flaps out of bounds".into()));
        }
        if !(0.0..=1.0).contains(&self.brakes) {
            return Err(SimError::InvalidControl("brakes out of bounds".into()));
        }
        Ok(())
    }
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            throttle: 0.0,
            flaps: 0.0,
            brakes: 0.0,
        }
    }
}
