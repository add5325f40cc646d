use log::warn;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{AeroCoefficients, AircraftGeometry, SpatialComponent};
use crate::resources::PhysicsConfig;

/// What one integration step actually did, kept for the force sample
/// and the consistency check.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationOutput {
    /// Linear acceleration applied [m/s^2]
    pub acceleration: Vector3<f64>,
    /// Angular acceleration applied, body frame [rad/s^2]
    pub angular_acceleration: Vector3<f64>,
    /// The numeric safety pass had to intervene
    pub safety_clamped: bool,
}

/// Rotational rate damping in the body frame [N m].
///
/// Each component is `0.5 * rho * V * S * c^2 * coeff * rate`: the
/// coefficients are negative, so the moment always opposes the current
/// rate, and the whole term scales with airspeed (strong in cruise,
/// negligible at a standstill).
pub fn rotational_damping_moments(
    coeffs: &AeroCoefficients,
    geometry: &AircraftGeometry,
    density: f64,
    airspeed: f64,
    angular_velocity: &Vector3<f64>,
) -> Vector3<f64> {
    let scale = 0.5 * density * airspeed * geometry.wing_area * geometry.chord * geometry.chord;
    Vector3::new(
        scale * coeffs.roll_damping * angular_velocity.x,
        scale * coeffs.pitch_damping * angular_velocity.y,
        scale * coeffs.yaw_damping * angular_velocity.z,
    )
}

/// Semi-implicit (symplectic) Euler step.
///
/// Velocity is updated before position, and angular velocity before
/// attitude, so the next force evaluation already sees the new rates.
/// The stability of the whole loop depends on this ordering.
pub fn integrate_state(
    spatial: &mut SpatialComponent,
    mass: f64,
    inertia: Vector3<f64>,
    net_force_world: Vector3<f64>,
    net_moment_body: Vector3<f64>,
    config: &PhysicsConfig,
    dt: f64,
) -> IntegrationOutput {
    let previous = spatial.clone();

    let acceleration = net_force_world / mass;
    let angular_acceleration = net_moment_body.component_div(&inertia);

    spatial.velocity += acceleration * dt;
    spatial.position += spatial.velocity * dt;

    spatial.angular_velocity += angular_acceleration * dt;
    if spatial.angular_velocity.norm_squared() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude = spatial.attitude * rotation;
        spatial.attitude =
            UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
    }

    let safety_clamped = apply_safety_limits(spatial, &previous, config);

    IntegrationOutput {
        acceleration,
        angular_acceleration,
        safety_clamped,
    }
}

/// Single numeric-safety site: every last-resort clamp lives here so a
/// misbehaving force model shows up in one place in the logs instead of
/// being hidden across call sites. Returns whether anything had to be
/// fixed. Non-finite values never reach consumers.
fn apply_safety_limits(
    spatial: &mut SpatialComponent,
    previous: &SpatialComponent,
    config: &PhysicsConfig,
) -> bool {
    let mut clamped = false;

    if !spatial.position.iter().all(|v| v.is_finite()) {
        warn!("Non-finite position after integration, restoring previous value");
        spatial.position = previous.position;
        clamped = true;
    }
    if !spatial.velocity.iter().all(|v| v.is_finite()) {
        warn!("Non-finite velocity after integration, restoring previous value");
        spatial.velocity = previous.velocity;
        clamped = true;
    }
    if !spatial.angular_velocity.iter().all(|v| v.is_finite()) {
        warn!("Non-finite angular velocity after integration, restoring previous value");
        spatial.angular_velocity = previous.angular_velocity;
        clamped = true;
    }
    if !spatial
        .attitude
        .as_ref()
        .coords
        .iter()
        .all(|v| v.is_finite())
    {
        warn!("Non-finite attitude after integration, restoring previous value");
        spatial.attitude = previous.attitude;
        clamped = true;
    }

    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > config.max_velocity {
        warn!(
            "Velocity {:.1} m/s exceeds limit {:.1} m/s, clamping",
            velocity_norm, config.max_velocity
        );
        spatial.velocity *= config.max_velocity / velocity_norm;
        clamped = true;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > config.max_angular_velocity {
        warn!(
            "Angular velocity {:.1} rad/s exceeds limit {:.1} rad/s, clamping",
            angular_velocity_norm, config.max_angular_velocity
        );
        spatial.angular_velocity *= config.max_angular_velocity / angular_velocity_norm;
        clamped = true;
    }

    clamped
}
