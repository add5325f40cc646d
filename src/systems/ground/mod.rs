mod contact;

pub use contact::{ContactPhase, GroundContactModel};
