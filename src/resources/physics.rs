use serde::{Deserialize, Serialize};

/// Integration and numeric-safety parameters, shared by every aircraft
/// in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration, positive down [m/s^2]
    pub gravity: f64,
    /// Last-resort linear velocity bound [m/s]
    pub max_velocity: f64,
    /// Last-resort angular velocity bound [rad/s]
    pub max_angular_velocity: f64,
    /// Frames longer than this are integrated in several substeps [s]
    pub max_substep_dt: f64,
    /// Hard ceiling on a single frame's dt, e.g. after a host-loop stall [s]
    pub max_frame_dt: f64,
    /// Below this airspeed aerodynamic forces are not evaluated [m/s]
    pub min_airspeed_threshold: f64,
    /// Tolerated force/acceleration mismatch before a defect is logged
    pub consistency_epsilon: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            max_velocity: 200.0,
            max_angular_velocity: 10.0,
            max_substep_dt: 0.02,
            max_frame_dt: 0.25,
            min_airspeed_threshold: 0.5,
            consistency_epsilon: 1e-6,
        }
    }
}
