use serde::{Deserialize, Serialize};

/// Ground contact thresholds and friction parameters.
///
/// `contact_height` and `liftoff_height` are deliberately different: the
/// gap between them is the hysteresis band that stops the contact state
/// from toggling every frame at the clamp boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Below this altitude a descending aircraft is considered touching [m]
    pub contact_height: f64,
    /// Above this altitude a grounded aircraft is confirmed airborne [m]
    pub liftoff_height: f64,
    /// Unconfirmed contact must persist this long before it is ground [s]
    pub confirm_dwell: f64,
    /// Contact confirms immediately once |climb rate| settles below this [m/s]
    pub settle_climb_rate: f64,

    /// Rolling resistance coefficient
    pub rolling_friction: f64,
    /// Additional friction coefficient at full brakes
    pub braking_friction: f64,
    /// Vertical restitution at touchdown (0 = no bounce)
    pub restitution: f64,
    /// Below this ground speed no friction is applied [m/s]
    pub standstill_speed: f64,

    /// Landing-gear pitch limits while on the ground [deg]
    pub ground_pitch_min_deg: f64,
    pub ground_pitch_max_deg: f64,
    /// Resting pitch the gear settles towards at low speed [deg]
    pub ground_pitch_neutral_deg: f64,
    /// Landing-gear roll limit while on the ground [deg]
    pub ground_roll_max_deg: f64,

    /// Airspeed above which a persistent grounded state is suspicious [m/s]
    pub taxi_speed_threshold: f64,
    /// Consecutive steps of grounded-at-speed before the watchdog flags
    pub watchdog_step_bound: u32,
}

impl ContactConfig {
    pub fn tricycle_gear() -> Self {
        Self {
            contact_height: 0.1,
            liftoff_height: 1.0,
            confirm_dwell: 0.25,
            settle_climb_rate: 0.5,
            rolling_friction: 0.02,
            braking_friction: 0.4,
            restitution: 0.0,
            standstill_speed: 0.1,
            ground_pitch_min_deg: -5.0,
            ground_pitch_max_deg: 15.0,
            ground_pitch_neutral_deg: 2.0,
            ground_roll_max_deg: 5.0,
            taxi_speed_threshold: 20.6,
            watchdog_step_bound: 900,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::tricycle_gear()
    }
}
