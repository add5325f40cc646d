mod air_data;
pub mod aircraft;
mod controls;
mod forces;
mod spatial;
mod state;

pub use air_data::AirData;
pub use aircraft::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, ConfigError, ContactConfig, MassModel,
    PropulsionConfig, RawAircraftConfig,
};
pub use controls::ControlInputs;
pub use forces::{Force, ForceAccumulator, ForceCategory, ForceSample, Moment, ReferenceFrame};
pub use spatial::SpatialComponent;
pub use state::AircraftState;
