use log::{info, warn};
use nalgebra::Vector3;

use crate::components::{
    AirData, AircraftConfig, AircraftState, ConfigError, ControlInputs, Force, ForceAccumulator,
    ForceCategory, ForceSample, Moment, ReferenceFrame, SpatialComponent,
};
use crate::resources::{EnvironmentModel, PhysicsConfig};
use crate::systems::aerodynamics::{calculate_aero_forces_moments, stall_warning};
use crate::systems::ground::GroundContactModel;
use crate::systems::physics::{integrate_state, rotational_damping_moments};
use crate::systems::propulsion::{compute_thrust, update_spool, PropulsionState};
use crate::utils::errors::SimError;

/// The per-frame flight dynamics orchestrator. Owns the mutable aircraft
/// state exclusively; everything it publishes is an owned copy.
///
/// Each `update` performs, in fixed order: environment sampling, air
/// data, aerodynamic forces and moments, propulsion, ground contact,
/// force summation, integration, post-integration clamps, and the
/// AOA/stall refresh. The ordering is load-bearing: lift must come from
/// this step's angle of attack, not the previous one's.
pub struct FlightModel {
    config: AircraftConfig,
    physics: PhysicsConfig,
    environment: EnvironmentModel,

    spatial: SpatialComponent,
    propulsion: PropulsionState,
    contact: GroundContactModel,
    accumulator: ForceAccumulator,

    /// World-frame external force accumulated for the next update only
    external_force: Vector3<f64>,

    last_acceleration: Vector3<f64>,
    last_airspeed: f64,
    last_alpha_deg: f64,
    last_stall_warning: bool,
    last_sample: ForceSample,
}

impl FlightModel {
    /// Build a model with a calm standard atmosphere and default
    /// integration limits. Fails fast on an unusable configuration.
    pub fn new(config: AircraftConfig) -> Result<Self, ConfigError> {
        Self::with_environment(config, EnvironmentModel::default(), PhysicsConfig::default())
    }

    pub fn with_environment(
        config: AircraftConfig,
        environment: EnvironmentModel,
        physics: PhysicsConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Flight model ready for '{}': mass={:.1}kg, wing_area={:.2}m2",
            config.name, config.mass.mass, config.geometry.wing_area
        );

        let spatial = SpatialComponent::default();
        let contact = GroundContactModel::new(config.contact, spatial.altitude());

        Ok(Self {
            config,
            physics,
            environment,
            spatial,
            propulsion: PropulsionState::default(),
            contact,
            accumulator: ForceAccumulator::new(),
            external_force: Vector3::zeros(),
            last_acceleration: Vector3::zeros(),
            last_airspeed: 0.0,
            last_alpha_deg: 0.0,
            last_stall_warning: false,
            last_sample: ForceSample::default(),
        })
    }

    /// Re-spawn at a new spatial state with a cold engine
    pub fn reset(&mut self, spatial: SpatialComponent) {
        let altitude = spatial.altitude();
        self.spatial = spatial;
        self.propulsion = PropulsionState::default();
        self.contact.reset(altitude);
        self.external_force = Vector3::zeros();
        self.last_acceleration = Vector3::zeros();
        self.last_airspeed = 0.0;
        self.last_alpha_deg = 0.0;
        self.last_stall_warning = false;
        self.last_sample = ForceSample::default();
    }

    /// Re-spawn in flight with the engine already spooled to a throttle
    /// setting
    pub fn reset_in_flight(&mut self, spatial: SpatialComponent, throttle: f64) {
        self.reset(spatial);
        self.propulsion = PropulsionState::at_throttle(throttle);
    }

    /// Accumulate a world-frame external force (gusts, collisions, tow
    /// cables). Applied during the next update only; collaborators must
    /// re-apply every frame.
    pub fn apply_external_force(&mut self, force: Vector3<f64>) {
        self.external_force += force;
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    /// Current published state without stepping
    pub fn state(&self) -> AircraftState {
        AircraftState::from_spatial(
            &self.spatial,
            self.last_acceleration,
            self.last_airspeed,
            self.last_alpha_deg,
            self.contact.is_grounded(),
            self.last_stall_warning,
        )
    }

    pub fn last_sample(&self) -> &ForceSample {
        &self.last_sample
    }

    /// The stuck-at-ground watchdog tripped at some point this flight
    pub fn ground_watchdog_flagged(&self) -> bool {
        self.contact.watchdog_flagged()
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Abnormally long frames are clamped to a hard ceiling and split
    /// into substeps so a host-loop stall can never feed one huge,
    /// divergence-prone integration step into the model.
    pub fn update(
        &mut self,
        dt: f64,
        controls: &ControlInputs,
    ) -> Result<(AircraftState, ForceSample), SimError> {
        controls.validate()?;

        if !dt.is_finite() || dt <= 0.0 {
            return Ok((self.state(), self.last_sample.clone()));
        }

        let frame_dt = dt.min(self.physics.max_frame_dt);
        let substeps = (frame_dt / self.physics.max_substep_dt).ceil().max(1.0) as usize;
        let h = frame_dt / substeps as f64;

        for _ in 0..substeps {
            self.step(h, controls);
        }

        // External forces are per-frame, not persistent
        self.external_force = Vector3::zeros();

        Ok((self.state(), self.last_sample.clone()))
    }

    fn step(&mut self, dt: f64, controls: &ControlInputs) {
        let mass = self.config.mass.mass;
        let weight_n = mass * self.physics.gravity;

        // 1. Environment
        let wind = self.environment.get_wind(&self.spatial.position);
        let density = self.environment.get_density(&self.spatial.position);

        // 2. Air data
        let air_data = AirData::calculate(&self.spatial, wind, density);

        self.accumulator.clear();

        // 3. Aerodynamic forces and moments
        let aero = calculate_aero_forces_moments(
            &self.config.geometry,
            &self.config.aero,
            &air_data,
            controls,
            self.physics.min_airspeed_threshold,
        );
        self.accumulator.add_force(Force {
            vector: aero.lift_body + aero.drag_body,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Aerodynamic,
        });
        self.accumulator.add_moment(Moment {
            vector: aero.moments_body,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Aerodynamic,
        });

        let damping = rotational_damping_moments(
            &self.config.aero,
            &self.config.geometry,
            air_data.density,
            air_data.true_airspeed,
            &self.spatial.angular_velocity,
        );
        self.accumulator.add_moment(Moment {
            vector: damping,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Aerodynamic,
        });

        // 4. Propulsion
        update_spool(&mut self.propulsion, &self.config.propulsion, controls.throttle, dt);
        let thrust_n = compute_thrust(
            &self.config.propulsion,
            &self.propulsion,
            air_data.true_airspeed,
            air_data.density,
        );
        self.accumulator.add_force(Force {
            vector: Vector3::new(thrust_n, 0.0, 0.0),
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });

        // 5. Gravity and accumulated external forces
        self.accumulator.add_force(Force {
            vector: Vector3::new(0.0, 0.0, weight_n),
            frame: ReferenceFrame::World,
            category: ForceCategory::Gravitational,
        });
        if self.external_force.norm_squared() > 0.0 {
            self.accumulator.add_force(Force {
                vector: self.external_force,
                frame: ReferenceFrame::World,
                category: ForceCategory::External,
            });
        }

        // 6. Ground contact: state transition, then contact forces. The
        // gear reacts the net vertical load of everything accumulated so
        // far, so the aircraft neither sinks into the runway nor lifts
        // off before the wings and thrust actually carry it.
        let altitude = self.spatial.altitude();
        self.contact.advance(altitude, self.spatial.climb_rate(), dt);

        let lift_world = self.spatial.attitude * aero.lift_body;
        let (partial_net, _) = self.accumulator.resolve(&self.spatial.attitude);
        if let Some(ground_force) = self.contact.contact_forces(
            altitude,
            partial_net.z,
            &self.spatial.velocity,
            controls.brakes,
        ) {
            self.accumulator.add_force(Force {
                vector: ground_force,
                frame: ReferenceFrame::World,
                category: ForceCategory::Ground,
            });
        }
        if self.contact.is_grounded() && self.spatial.velocity.z > 0.0 {
            // Any residual sink rate is absorbed by the gear before
            // integration; upward velocity is left alone for liftoff
            self.spatial.velocity.z = 0.0;
        }

        // 7. Force summation
        let (net_force, net_moment) = self.accumulator.resolve(&self.spatial.attitude);

        // Diagnostic breakdown, captured with the attitude the forces
        // were resolved with
        let mut sample = ForceSample {
            thrust: self
                .accumulator
                .category_total(&ForceCategory::Propulsive, &self.spatial.attitude),
            lift: lift_world,
            drag: self.spatial.attitude * aero.drag_body,
            weight: Vector3::new(0.0, 0.0, weight_n),
            ground: self
                .accumulator
                .category_total(&ForceCategory::Ground, &self.spatial.attitude),
            external: self.external_force,
            net_force,
            net_moment,
            accel_from_forces: net_force / mass,
            integrated_accel: Vector3::zeros(),
        };

        // 8. Integration
        let output = integrate_state(
            &mut self.spatial,
            mass,
            self.config.mass.inertia_diagonal(),
            net_force,
            net_moment,
            &self.physics,
            dt,
        );
        sample.integrated_accel = output.acceleration;

        // 9. Post-integration ground clamps
        self.contact.enforce_surface(&mut self.spatial);
        self.contact
            .constrain_attitude(&mut self.spatial, air_data.true_airspeed, dt);

        // 10. AOA/stall refresh from the post-integration state
        let air_after = AirData::calculate(&self.spatial, wind, density);
        self.last_airspeed = air_after.true_airspeed;
        self.last_alpha_deg = air_after.alpha.to_degrees();
        self.last_stall_warning =
            stall_warning(&self.config.aero, self.last_alpha_deg, controls.flaps);
        self.last_acceleration = output.acceleration;

        self.contact
            .observe(self.last_airspeed, self.spatial.altitude());

        let consistency_error = sample.consistency_error();
        if consistency_error > self.physics.consistency_epsilon {
            warn!(
                "Force/acceleration mismatch: |F/m - a| = {:.3e} m/s^2",
                consistency_error
            );
        }

        self.last_sample = sample;
    }
}
