mod aero;
mod contact;
mod geometry;
mod loader;
mod mass;
mod propulsion;

pub use aero::AeroCoefficients;
pub use contact::ContactConfig;
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::MassModel;
pub use propulsion::PropulsionConfig;

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the core needs to know about one aircraft type. Loaded
/// once, validated once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub mass: MassModel,
    pub geometry: AircraftGeometry,
    pub aero: AeroCoefficients,
    pub propulsion: PropulsionConfig,
    pub contact: ContactConfig,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl AircraftConfig {
    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna172".to_string(),
            mass: MassModel::cessna_172(),
            geometry: AircraftGeometry::cessna_172(),
            aero: AeroCoefficients::cessna_172(),
            propulsion: PropulsionConfig::cessna_172(),
            contact: ContactConfig::tricycle_gear(),
        }
    }

    /// Load and validate an aircraft description from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawAircraftConfig = serde_yaml::from_str(contents)?;
        let config = Self::from_raw(raw)?;
        info!(
            "Loaded aircraft '{}': mass={:.1}kg, wing_area={:.2}m2, static_thrust={:.0}N, Cmq={:.1}",
            config.name,
            config.mass.mass,
            config.geometry.wing_area,
            config.propulsion.max_static_thrust,
            config.aero.pitch_damping,
        );
        Ok(config)
    }

    /// Fail-fast sanity checks. An aircraft that fails here cannot be
    /// simulated at all, so the facade refuses to construct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass.mass),
            ("ixx", self.mass.ixx),
            ("iyy", self.mass.iyy),
            ("izz", self.mass.izz),
            ("wing_area", self.geometry.wing_area),
            ("wing_span", self.geometry.wing_span),
            ("chord", self.geometry.chord),
            ("prop_diameter", self.propulsion.prop_diameter),
            ("stall_aoa_deg", self.aero.stall_aoa_deg),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    field, value
                )));
            }
        }

        if !(0.0..=45.0).contains(&self.aero.aoa_limit_deg) || self.aero.aoa_limit_deg == 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "aoa_limit_deg must be in (0, 45], got {}",
                self.aero.aoa_limit_deg
            )));
        }

        if self.propulsion.max_static_thrust < 0.0 {
            return Err(ConfigError::ValidationError(
                "max_static_thrust must not be negative".into(),
            ));
        }

        if self.contact.liftoff_height <= self.contact.contact_height {
            return Err(ConfigError::ValidationError(
                "liftoff_height must exceed contact_height (hysteresis band)".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AircraftConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_hysteresis_band_refused() {
        let mut config = AircraftConfig::default();
        config.contact.liftoff_height = 0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_aoa_limit_refused() {
        let mut config = AircraftConfig::default();
        config.aero.aoa_limit_deg = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AircraftConfig::cessna_172();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let restored: AircraftConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored.name, config.name);
        assert_eq!(restored.mass.mass, config.mass.mass);
        assert_eq!(restored.aero.aoa_limit_deg, config.aero.aoa_limit_deg);
    }
}
