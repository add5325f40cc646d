use log::warn;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{ContactConfig, SpatialComponent};

/// Explicit contact phase. `Transitioning` is the hysteresis buffer
/// between first touch and confirmed ground contact; without it a
/// touchdown at the clamp boundary toggles airborne/grounded every
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Airborne,
    Transitioning,
    Grounded,
}

/// Ground contact state machine plus the normal/friction force model and
/// the stuck-at-ground watchdog.
#[derive(Debug, Clone)]
pub struct GroundContactModel {
    config: ContactConfig,
    phase: ContactPhase,
    dwell: f64,
    watchdog_steps: u32,
    watchdog_flagged: bool,
}

impl GroundContactModel {
    pub fn new(config: ContactConfig, spawn_altitude: f64) -> Self {
        let phase = if spawn_altitude <= config.contact_height {
            ContactPhase::Grounded
        } else {
            ContactPhase::Airborne
        };
        Self {
            config,
            phase,
            dwell: 0.0,
            watchdog_steps: 0,
            watchdog_flagged: false,
        }
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == ContactPhase::Grounded
    }

    /// Touching the surface closely enough for contact forces to act
    pub fn in_contact(&self, altitude: f64) -> bool {
        self.phase != ContactPhase::Airborne && altitude <= self.config.contact_height
    }

    /// Advance the state machine one step. `climb_rate` is positive
    /// upwards.
    pub fn advance(&mut self, altitude: f64, climb_rate: f64, dt: f64) {
        match self.phase {
            ContactPhase::Airborne => {
                if altitude < self.config.contact_height && climb_rate <= 0.0 {
                    self.phase = ContactPhase::Transitioning;
                    self.dwell = 0.0;
                }
            }
            ContactPhase::Transitioning => {
                if altitude > self.config.liftoff_height {
                    // Touched and climbed straight back out
                    self.phase = ContactPhase::Airborne;
                } else {
                    self.dwell += dt;
                    if self.dwell >= self.config.confirm_dwell
                        || climb_rate.abs() < self.config.settle_climb_rate
                    {
                        self.phase = ContactPhase::Grounded;
                    }
                }
            }
            ContactPhase::Grounded => {
                // The liftoff threshold sits well above the contact
                // threshold; the gap is the hysteresis band
                if altitude > self.config.liftoff_height {
                    self.phase = ContactPhase::Airborne;
                    self.dwell = 0.0;
                    self.watchdog_steps = 0;
                }
            }
        }
    }

    /// Normal and friction forces in the world frame, or `None` when no
    /// contact force applies this step.
    ///
    /// `vertical_load` is the +z (downward) component of every other
    /// force acting on the aircraft. The gear reacts exactly that load
    /// while it is positive; once lift and thrust outweigh it the normal
    /// force vanishes and the aircraft is free to climb. Friction
    /// opposes the horizontal ground-relative velocity and is zeroed
    /// near standstill so it can never push the aircraft backwards.
    pub fn contact_forces(
        &self,
        altitude: f64,
        vertical_load: f64,
        velocity: &Vector3<f64>,
        brake_input: f64,
    ) -> Option<Vector3<f64>> {
        if !self.in_contact(altitude) {
            return None;
        }

        let normal = vertical_load.max(0.0);

        let mut force = Vector3::new(0.0, 0.0, -normal);

        let ground_velocity = Vector3::new(velocity.x, velocity.y, 0.0);
        let ground_speed = ground_velocity.norm();
        if ground_speed > self.config.standstill_speed {
            let mu = self.config.rolling_friction
                + self.config.braking_friction * brake_input.clamp(0.0, 1.0);
            force -= ground_velocity / ground_speed * (mu * normal);
        }

        Some(force)
    }

    /// Keep the aircraft out of the terrain: clamp the position to the
    /// surface and kill (or reflect with the configured restitution) any
    /// remaining sink rate. Runs after integration.
    pub fn enforce_surface(&self, spatial: &mut SpatialComponent) {
        if spatial.position.z >= 0.0 {
            spatial.position.z = 0.0;
            if spatial.velocity.z > 0.0 {
                spatial.velocity.z = -self.config.restitution * spatial.velocity.z;
            }
        }
    }

    /// Landing-gear geometry limits while on the ground: pitch stays
    /// between the nose-gear and tail-strike angles, roll stays within
    /// the gear track, and at taxi speeds the gear settles the airframe
    /// towards its resting pitch.
    pub fn constrain_attitude(&self, spatial: &mut SpatialComponent, airspeed: f64, dt: f64) {
        if !self.is_grounded() {
            return;
        }

        let (mut roll, mut pitch, yaw) = spatial.attitude.euler_angles();
        let pitch_min = self.config.ground_pitch_min_deg.to_radians();
        let pitch_max = self.config.ground_pitch_max_deg.to_radians();
        let roll_max = self.config.ground_roll_max_deg.to_radians();

        // Gear settling at low speed, where aerodynamic damping is gone
        if airspeed < 5.0 {
            let neutral = self.config.ground_pitch_neutral_deg.to_radians();
            let spring_accel = -2.0 * (pitch - neutral) - 3.0 * spatial.angular_velocity.y;
            spatial.angular_velocity.y += spring_accel * dt;
            spatial.angular_velocity.x -= 3.0 * spatial.angular_velocity.x * dt;
        }

        let mut touched = false;
        if pitch < pitch_min {
            pitch = pitch_min;
            spatial.angular_velocity.y = spatial.angular_velocity.y.max(0.0);
            touched = true;
        } else if pitch > pitch_max {
            pitch = pitch_max;
            spatial.angular_velocity.y = spatial.angular_velocity.y.min(0.0);
            touched = true;
        }

        if roll.abs() > roll_max {
            roll = roll_max.copysign(roll);
            if roll > 0.0 {
                spatial.angular_velocity.x = spatial.angular_velocity.x.min(0.0);
            } else {
                spatial.angular_velocity.x = spatial.angular_velocity.x.max(0.0);
            }
            touched = true;
        }

        if touched {
            spatial.attitude = UnitQuaternion::from_euler_angles(roll, pitch, yaw);
        }
    }

    /// Stuck-at-ground watchdog: grounded at speed with the wheels still
    /// on the surface is normal during a takeoff roll, but persisting
    /// past the configured bound means lift never won and something in
    /// the contact model is broken.
    pub fn observe(&mut self, airspeed: f64, altitude: f64) {
        let suspicious = self.is_grounded()
            && airspeed > self.config.taxi_speed_threshold
            && altitude < self.config.contact_height;

        if suspicious {
            self.watchdog_steps += 1;
            if self.watchdog_steps > self.config.watchdog_step_bound && !self.watchdog_flagged {
                self.watchdog_flagged = true;
                warn!(
                    "Ground contact inconsistency: on ground at {:.1} m/s for {} consecutive steps",
                    airspeed, self.watchdog_steps
                );
            }
        } else {
            self.watchdog_steps = 0;
        }
    }

    pub fn watchdog_flagged(&self) -> bool {
        self.watchdog_flagged
    }

    pub fn reset(&mut self, spawn_altitude: f64) {
        self.phase = if spawn_altitude <= self.config.contact_height {
            ContactPhase::Grounded
        } else {
            ContactPhase::Airborne
        };
        self.dwell = 0.0;
        self.watchdog_steps = 0;
        self.watchdog_flagged = false;
    }
}
