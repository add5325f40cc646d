use crate::components::SpatialComponent;
use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;

/// Read-only snapshot of the aircraft published after every update.
/// Telemetry, coaching and audio collaborators consume copies of this;
/// none of them can reach back into the core.
#[derive(Debug, Clone, Serialize)]
pub struct AircraftState {
    /// Position in world space, NED [m]
    pub position: Vector3<f64>,
    /// Velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Body-to-world attitude
    pub attitude: UnitQuaternion<f64>,
    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Acceleration applied by the last integration step [m/s^2]
    pub acceleration: Vector3<f64>,

    /// True airspeed [m/s]
    pub airspeed: f64,
    /// Reported angle of attack [deg]. Never clamped; the coefficient
    /// lookup clamp is internal to the force calculator.
    pub alpha_deg: f64,
    pub on_ground: bool,
    pub stall_warning: bool,
}

impl AircraftState {
    pub(crate) fn from_spatial(
        spatial: &SpatialComponent,
        acceleration: Vector3<f64>,
        airspeed: f64,
        alpha_deg: f64,
        on_ground: bool,
        stall_warning: bool,
    ) -> Self {
        Self {
            position: spatial.position,
            velocity: spatial.velocity,
            attitude: spatial.attitude,
            angular_velocity: spatial.angular_velocity,
            acceleration,
            airspeed,
            alpha_deg,
            on_ground,
            stall_warning,
        }
    }

    /// Height above the ground plane [m]
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    /// Rate of climb [m/s], positive upwards
    pub fn climb_rate(&self) -> f64 {
        -self.velocity.z
    }

    /// Roll angle [rad]
    pub fn roll(&self) -> f64 {
        self.attitude.euler_angles().0
    }

    /// Pitch angle [rad]
    pub fn pitch(&self) -> f64 {
        self.attitude.euler_angles().1
    }

    /// Heading [rad]
    pub fn yaw(&self) -> f64 {
        self.attitude.euler_angles().2
    }
}
