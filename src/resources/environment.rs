use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    SEA_LEVEL_DENSITY, SEA_LEVEL_TEMPERATURE, TEMPERATURE_LAPSE_RATE, VON_KARMAN,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: SEA_LEVEL_DENSITY,
            sea_level_temperature: SEA_LEVEL_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WindConfig {
    Constant {
        velocity: Vector3<f64>,
    },
    Logarithmic {
        d: f64,
        z0: f64,
        u_star: f64,
        bearing: f64,
    },
    PowerLaw {
        u_r: f64,
        z_r: f64,
        bearing: f64,
        alpha: f64,
    },
}

impl Default for WindConfig {
    fn default() -> Self {
        Self::Constant {
            velocity: Vector3::zeros(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub wind_model_config: WindConfig,
    pub atmosphere_config: AtmosphereConfig,
}

/// Atmosphere and wind lookup for the core. The defaults are a standard
/// atmosphere with zero wind, so a missing weather collaborator degrades
/// gracefully instead of failing the simulation.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentModel {
    wind: WindConfig,
    atmosphere: AtmosphereConfig,
}

// Exponent of the ISA tropospheric density relation, g / (R * L) - 1
const ISA_DENSITY_EXPONENT: f64 = 4.2561;
const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;
const MIN_DENSITY: f64 = 1e-3;

impl EnvironmentModel {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            wind: config.wind_model_config.clone(),
            atmosphere: config.atmosphere_config.clone(),
        }
    }

    /// Wind vector in the world frame at a world position [m/s]
    pub fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        let altitude = (-position.z).max(0.0);
        match &self.wind {
            WindConfig::Constant { velocity } => *velocity,
            WindConfig::Logarithmic {
                d,
                z0,
                u_star,
                bearing,
            } => {
                let height = (altitude - d).max(*z0);
                let speed = (u_star / VON_KARMAN) * (height / z0).ln().max(0.0);
                Self::bearing_vector(*bearing) * speed
            }
            WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            } => {
                let speed = if altitude > 0.0 && *z_r > 0.0 {
                    u_r * (altitude / z_r).powf(*alpha)
                } else {
                    0.0
                };
                Self::bearing_vector(*bearing) * speed
            }
        }
    }

    /// Air density at a world position [kg/m^3]
    pub fn get_density(&self, position: &Vector3<f64>) -> f64 {
        let altitude = (-position.z).max(0.0);
        match self.atmosphere.model_type {
            AtmosphereType::Constant => self.atmosphere.sea_level_density,
            AtmosphereType::Standard => {
                let rho0 = self.atmosphere.sea_level_density;
                let t0 = self.atmosphere.sea_level_temperature;
                if altitude < TROPOPAUSE_ALTITUDE {
                    let temperature = t0 - TEMPERATURE_LAPSE_RATE * altitude;
                    (rho0 * (temperature / t0).powf(ISA_DENSITY_EXPONENT)).max(MIN_DENSITY)
                } else {
                    let t11 = t0 - TEMPERATURE_LAPSE_RATE * TROPOPAUSE_ALTITUDE;
                    let rho11 = rho0 * (t11 / t0).powf(ISA_DENSITY_EXPONENT);
                    (rho11 * (-(altitude - TROPOPAUSE_ALTITUDE) / 6341.6).exp()).max(MIN_DENSITY)
                }
            }
        }
    }

    fn bearing_vector(bearing_deg: f64) -> Vector3<f64> {
        let bearing = bearing_deg.to_radians();
        Vector3::new(bearing.cos(), bearing.sin(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_wind() {
        let config = EnvironmentConfig {
            wind_model_config: WindConfig::Constant {
                velocity: Vector3::new(1.0, 0.0, 0.0),
            },
            atmosphere_config: AtmosphereConfig::default(),
        };

        let env = EnvironmentModel::new(&config);
        let wind = env.get_wind(&Vector3::zeros());

        assert_eq!(wind, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_logarithmic_wind_grows_with_altitude() {
        let config = EnvironmentConfig {
            wind_model_config: WindConfig::Logarithmic {
                d: 0.0,
                z0: 0.03,
                u_star: 0.5,
                bearing: 0.0,
            },
            atmosphere_config: AtmosphereConfig::default(),
        };
        let env = EnvironmentModel::new(&config);

        let wind_low = env.get_wind(&Vector3::new(0.0, 0.0, -10.0));
        let wind_high = env.get_wind(&Vector3::new(0.0, 0.0, -100.0));

        assert!(wind_low.x.is_finite() && wind_high.x.is_finite());
        assert!(wind_high.norm() > wind_low.norm());
        // Bearing 0: wind along +x, no crosswind
        assert!(wind_low.x > 0.0);
        assert_relative_eq!(wind_low.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_power_law_wind() {
        let config = EnvironmentConfig {
            wind_model_config: WindConfig::PowerLaw {
                u_r: 10.0,
                z_r: 10.0,
                bearing: 90.0,
                alpha: 0.14,
            },
            atmosphere_config: AtmosphereConfig::default(),
        };
        let env = EnvironmentModel::new(&config);

        let wind_ref = env.get_wind(&Vector3::new(0.0, 0.0, -10.0));
        assert_relative_eq!(wind_ref.norm(), 10.0, epsilon = 1e-9);
        // Bearing 90: wind along +y (east)
        assert_relative_eq!(wind_ref.x, 0.0, epsilon = 1e-9);

        // No wind at the surface
        let wind_surface = env.get_wind(&Vector3::zeros());
        assert_relative_eq!(wind_surface.norm(), 0.0);
    }

    #[test]
    fn test_density_decreases_with_altitude() {
        let env = EnvironmentModel::default();

        let altitudes = [0.0, 1000.0, 5000.0, 10000.0];
        let densities: Vec<f64> = altitudes
            .iter()
            .map(|h| env.get_density(&Vector3::new(0.0, 0.0, -h)))
            .collect();

        for pair in densities.windows(2) {
            assert!(pair[0] > pair[1], "Density should decrease with altitude");
        }

        assert_relative_eq!(densities[0], 1.225, epsilon = 0.001);
    }

    #[test]
    fn test_density_stays_positive_at_extreme_altitude() {
        let env = EnvironmentModel::default();
        let density = env.get_density(&Vector3::new(0.0, 0.0, -80_000.0));
        assert!(density > 0.0 && density.is_finite());
    }

    #[test]
    fn test_defaults_are_calm_standard_atmosphere() {
        let env = EnvironmentModel::default();
        assert_relative_eq!(env.get_wind(&Vector3::zeros()).norm(), 0.0);
        assert_relative_eq!(env.get_density(&Vector3::zeros()), 1.225, epsilon = 0.001);
    }
}
