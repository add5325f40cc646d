mod force_calculator;

pub use force_calculator::{
    calculate_aero_forces_moments, drag_coefficient, lift_coefficient, stall_warning, AeroOutputs,
};
