/// Sea-level air density [kg/m^3]
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Sea-level temperature [K]
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// ISA tropospheric temperature lapse rate [K/m]
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065;

/// Knots to metres per second
pub const KNOTS_TO_MPS: f64 = 0.514444;

/// Von Karman constant, used by the logarithmic wind profile
pub const VON_KARMAN: f64 = 0.4;
