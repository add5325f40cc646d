pub mod aerodynamics;
pub mod ground;
pub mod physics;
pub mod propulsion;
