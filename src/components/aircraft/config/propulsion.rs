use serde::{Deserialize, Serialize};

/// Fixed-pitch propeller and engine parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Thrust at full power, zero airspeed, sea level [N]
    pub max_static_thrust: f64,
    /// Propeller diameter [m]
    pub prop_diameter: f64,
    /// Propeller speed at full throttle [rpm]
    pub max_rpm: f64,
    /// Propeller speed at idle [rpm]
    pub idle_rpm: f64,
    /// Advance ratio at which thrust has fallen to zero
    pub j_zero_thrust: f64,
    /// First-order spool-up time constant [s]
    pub spool_up_time: f64,
    /// First-order spool-down time constant [s]
    pub spool_down_time: f64,
}

impl PropulsionConfig {
    pub fn cessna_172() -> Self {
        Self {
            max_static_thrust: 2200.0,
            prop_diameter: 1.905,
            max_rpm: 2700.0,
            idle_rpm: 600.0,
            j_zero_thrust: 1.4,
            spool_up_time: 2.0,
            spool_down_time: 1.5,
        }
    }
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self::cessna_172()
    }
}
