pub mod components;
pub mod flight_model;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftConfig, AircraftState, ConfigError, ControlInputs, ForceSample, SpatialComponent,
};
pub use flight_model::FlightModel;
pub use resources::{EnvironmentConfig, EnvironmentModel, PhysicsConfig};
pub use utils::SimError;
