use crate::components::SpatialComponent;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// Air data derived from the spatial state and the local environment.
/// `alpha` and `beta` are in radians and UNCLAMPED; clamping for
/// coefficient lookup happens in the aerodynamic force calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirData {
    pub true_airspeed: f64,
    pub alpha: f64,
    pub beta: f64,
    pub density: f64,
    pub dynamic_pressure: f64,
    /// Airflow-relative velocity in the body frame [m/s]
    pub relative_velocity: Vector3<f64>,
    pub wind_velocity: Vector3<f64>,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            density: crate::utils::constants::SEA_LEVEL_DENSITY,
            dynamic_pressure: 0.0,
            relative_velocity: Vector3::zeros(),
            wind_velocity: Vector3::zeros(),
        }
    }
}

impl AirData {
    pub fn calculate(spatial: &SpatialComponent, wind: Vector3<f64>, density: f64) -> Self {
        // Relative velocity through the air mass, expressed in body axes
        let velocity_body = spatial.attitude.inverse() * spatial.velocity;
        let wind_body = spatial.attitude.inverse() * wind;
        let relative_velocity = velocity_body - wind_body;
        let airspeed = relative_velocity.norm();

        let alpha = Self::calculate_alpha(&relative_velocity, airspeed);
        let beta = Self::calculate_beta(&relative_velocity, airspeed);
        let dynamic_pressure = 0.5 * density * airspeed * airspeed;

        Self {
            true_airspeed: airspeed,
            alpha,
            beta,
            density,
            dynamic_pressure,
            relative_velocity,
            wind_velocity: wind,
        }
    }

    fn calculate_alpha(relative_velocity: &Vector3<f64>, airspeed: f64) -> f64 {
        if airspeed > MIN_AIRSPEED_THRESHOLD {
            relative_velocity.z.atan2(relative_velocity.x)
        } else {
            0.0
        }
    }

    fn calculate_beta(relative_velocity: &Vector3<f64>, airspeed: f64) -> f64 {
        if airspeed > MIN_AIRSPEED_THRESHOLD {
            (relative_velocity.y / airspeed).asin()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use std::f64::consts::PI;

    #[test]
    fn test_stationary_aircraft() {
        let spatial = SpatialComponent::default();
        let air_data = AirData::calculate(&spatial, Vector3::zeros(), 1.225);

        assert!(air_data.true_airspeed < MIN_AIRSPEED_THRESHOLD);
        assert_relative_eq!(air_data.alpha, 0.0);
        assert_relative_eq!(air_data.beta, 0.0);
        assert_relative_eq!(air_data.dynamic_pressure, 0.0);
    }

    #[test]
    fn test_angle_of_attack_from_velocity() {
        // (velocity_x, velocity_z, expected_alpha): NED, z down, so a
        // descending velocity vector produces positive alpha at zero pitch
        let test_cases = vec![
            (50.0, 0.0, 0.0),
            (50.0, 8.816, 10.0 * PI / 180.0),
            (50.0, -8.816, -10.0 * PI / 180.0),
        ];

        for (vx, vz, expected_alpha) in test_cases {
            let spatial = SpatialComponent {
                velocity: Vector3::new(vx, 0.0, vz),
                ..Default::default()
            };
            let air_data = AirData::calculate(&spatial, Vector3::zeros(), 1.225);
            assert!((air_data.alpha - expected_alpha).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pitch_changes_alpha() {
        // Nose up 10 degrees, velocity horizontal: airflow arrives from
        // below the nose, alpha = +10 degrees
        let pitch = 10.0 * PI / 180.0;
        let spatial = SpatialComponent {
            velocity: Vector3::new(50.0, 0.0, 0.0),
            attitude: UnitQuaternion::from_euler_angles(0.0, pitch, 0.0),
            ..Default::default()
        };
        let air_data = AirData::calculate(&spatial, Vector3::zeros(), 1.225);
        assert_relative_eq!(air_data.alpha, pitch, epsilon = 1e-9);
    }

    #[test]
    fn test_headwind_raises_airspeed() {
        let spatial = SpatialComponent {
            velocity: Vector3::new(50.0, 0.0, 0.0),
            ..Default::default()
        };
        // Wind blowing south while flying north
        let air_data = AirData::calculate(&spatial, Vector3::new(-10.0, 0.0, 0.0), 1.225);
        assert_relative_eq!(air_data.true_airspeed, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dynamic_pressure() {
        let spatial = SpatialComponent {
            velocity: Vector3::new(50.0, 0.0, 0.0),
            ..Default::default()
        };
        let air_data = AirData::calculate(&spatial, Vector3::zeros(), 1.225);
        assert_relative_eq!(
            air_data.dynamic_pressure,
            0.5 * 1.225 * 50.0 * 50.0,
            epsilon = 1e-9
        );
    }
}
