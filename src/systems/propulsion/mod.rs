mod propeller;

pub use propeller::{
    advance_ratio, compute_thrust, propeller_rpm, thrust_at, update_spool, PropulsionState,
};
