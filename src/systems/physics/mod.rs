mod integrator;

pub use integrator::{integrate_state, rotational_damping_moments, IntegrationOutput};
