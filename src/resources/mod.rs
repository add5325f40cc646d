mod environment;
mod physics;

pub use environment::{
    AtmosphereConfig, AtmosphereType, EnvironmentConfig, EnvironmentModel, WindConfig,
};
pub use physics::PhysicsConfig;
