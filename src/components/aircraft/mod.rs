pub mod config;

pub use config::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, ConfigError, ContactConfig, MassModel,
    PropulsionConfig, RawAircraftConfig,
};
