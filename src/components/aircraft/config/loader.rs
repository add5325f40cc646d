use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, ContactConfig, MassModel, PropulsionConfig,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

fn default_aero() -> AeroCoefficients {
    AeroCoefficients::cessna_172()
}

fn default_contact() -> ContactConfig {
    ContactConfig::tricycle_gear()
}

fn default_max_rpm() -> f64 {
    2700.0
}

fn default_idle_rpm() -> f64 {
    600.0
}

fn default_j_zero_thrust() -> f64 {
    1.4
}

fn default_spool_up() -> f64 {
    2.0
}

fn default_spool_down() -> f64 {
    1.5
}

/// Flat on-disk aircraft description. Mass, geometry and propulsion are
/// required; every coefficient block falls back to the documented
/// light-aircraft defaults when absent.
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    pub chord: f64,

    /// Propulsion
    pub max_static_thrust: f64,
    pub prop_diameter: f64,
    #[serde(default = "default_max_rpm")]
    pub max_rpm: f64,
    #[serde(default = "default_idle_rpm")]
    pub idle_rpm: f64,
    #[serde(default = "default_j_zero_thrust")]
    pub j_zero_thrust: f64,
    #[serde(default = "default_spool_up")]
    pub spool_up_time: f64,
    #[serde(default = "default_spool_down")]
    pub spool_down_time: f64,

    /// Aerodynamic coefficients, all optional
    #[serde(default = "default_aero")]
    pub aero: AeroCoefficients,

    /// Ground contact parameters, all optional
    #[serde(default = "default_contact")]
    pub contact: ContactConfig,
}

impl AircraftConfig {
    pub(crate) fn from_raw(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let config = Self {
            name: raw.name,
            mass: MassModel::new(raw.mass, raw.ixx, raw.iyy, raw.izz),
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.chord),
            aero: raw.aero,
            propulsion: PropulsionConfig {
                max_static_thrust: raw.max_static_thrust,
                prop_diameter: raw.prop_diameter,
                max_rpm: raw.max_rpm,
                idle_rpm: raw.idle_rpm,
                j_zero_thrust: raw.j_zero_thrust,
                spool_up_time: raw.spool_up_time,
                spool_down_time: raw.spool_down_time,
            },
            contact: raw.contact,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MINIMAL_YAML: &str = r#"
name: TestTrainer
mass: 1111.0
ixx: 1285.3
iyy: 1824.9
izz: 2666.9
wing_area: 16.2
wing_span: 11.0
chord: 1.5
max_static_thrust: 2200.0
prop_diameter: 1.905
"#;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let raw: RawAircraftConfig = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        let config = AircraftConfig::from_raw(raw).unwrap();

        assert_eq!(config.name, "TestTrainer");
        assert_relative_eq!(config.aero.aoa_limit_deg, 15.0);
        assert_relative_eq!(config.aero.stall_aoa_deg, 17.0);
        assert_relative_eq!(config.aero.pitch_damping, -25.0);
        assert_relative_eq!(config.propulsion.max_rpm, 2700.0);
        assert_relative_eq!(config.contact.liftoff_height, 1.0);
    }

    #[test]
    fn test_aero_block_overrides_defaults() {
        let yaml = format!(
            "{}\naero:\n  cl_0: 0.25\n  cl_alpha: 0.09\n  cl_max: 1.5\n  cd_0: 0.03\n  \
             oswald_efficiency: 0.75\n  stall_aoa_deg: 16.0\n  post_stall_decay: 0.05\n  \
             post_stall_cl_min: 0.4\n  aoa_limit_deg: 12.0\n  cl_flap_delta: 0.5\n  \
             cl_max_flaps: 2.0\n  flap_stall_reduction_deg: 2.0\n  cm_deltae: 0.4\n  \
             cl_deltaa: 0.15\n  cn_deltar: 0.1\n  cm_alpha: -0.35\n  equilibrium_alpha: 0.035\n  \
             pitch_damping: -30.0\n  roll_damping: -8.0\n  yaw_damping: -6.0\n",
            MINIMAL_YAML
        );
        let raw: RawAircraftConfig = serde_yaml::from_str(&yaml).unwrap();
        let config = AircraftConfig::from_raw(raw).unwrap();

        assert_relative_eq!(config.aero.aoa_limit_deg, 12.0);
        assert_relative_eq!(config.aero.pitch_damping, -30.0);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<RawAircraftConfig, _> = serde_yaml::from_str("name: NoMass\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_mass_refused() {
        let yaml = MINIMAL_YAML.replace("mass: 1111.0", "mass: 0.0");
        let raw: RawAircraftConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(
            AircraftConfig::from_raw(raw),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_non_positive_wing_area_refused() {
        let yaml = MINIMAL_YAML.replace("wing_area: 16.2", "wing_area: -1.0");
        let raw: RawAircraftConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(
            AircraftConfig::from_raw(raw),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
