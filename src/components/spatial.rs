use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Spatial state of the aircraft in the NED world frame (x north, y east,
/// z down). Altitude above the ground plane is `-position.z`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s], (p, q, r) about body x, y, z
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Spawn at a position with everything else zeroed
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
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
}
