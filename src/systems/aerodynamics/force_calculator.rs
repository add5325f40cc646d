use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::components::{AeroCoefficients, AirData, AircraftGeometry, ControlInputs};

/// Aerodynamic forces (body frame) and the quantities consumers care
/// about. `alpha_deg` is the true, unclamped angle of attack; the clamp
/// only ever applies to coefficient lookup.
#[derive(Debug, Clone)]
pub struct AeroOutputs {
    pub lift_body: Vector3<f64>,
    pub drag_body: Vector3<f64>,
    /// Control and stability moments in the body frame [N m]. Rate
    /// damping is applied separately by the integrator stage.
    pub moments_body: Vector3<f64>,
    pub alpha_deg: f64,
    pub cl: f64,
    pub cd: f64,
    pub stall_warning: bool,
}

impl AeroOutputs {
    fn quiet(alpha_deg: f64, stall_warning: bool) -> Self {
        Self {
            lift_body: Vector3::zeros(),
            drag_body: Vector3::zeros(),
            moments_body: Vector3::zeros(),
            alpha_deg,
            cl: 0.0,
            cd: 0.0,
            stall_warning,
        }
    }
}

/// Effective lift parameters with flaps deployed: flaps raise the
/// camber line and the attainable CL but stall earlier.
fn flap_adjusted(coeffs: &AeroCoefficients, flaps: f64) -> (f64, f64, f64) {
    let cl_0 = coeffs.cl_0 + coeffs.cl_flap_delta * flaps;
    let cl_max = coeffs.cl_max + (coeffs.cl_max_flaps - coeffs.cl_max) * flaps;
    let stall_aoa = coeffs.stall_aoa_deg - coeffs.flap_stall_reduction_deg * flaps;
    (cl_0, cl_max, stall_aoa)
}

/// Lift coefficient at a (lookup-clamped) angle of attack in degrees.
/// Linear up to the stall angle, exponential decay past it, with a
/// symmetric linear branch for strongly negative AOA.
pub fn lift_coefficient(coeffs: &AeroCoefficients, alpha_deg: f64, flaps: f64) -> f64 {
    let (cl_0, cl_max, stall_aoa) = flap_adjusted(coeffs, flaps);

    if alpha_deg < -5.0 {
        return (cl_0 + coeffs.cl_alpha * alpha_deg).max(-1.0);
    }

    if alpha_deg < stall_aoa {
        (cl_0 + coeffs.cl_alpha * alpha_deg).min(cl_max)
    } else {
        let stall_excess = alpha_deg - stall_aoa;
        (cl_max * (-coeffs.post_stall_decay * stall_excess).exp()).max(coeffs.post_stall_cl_min)
    }
}

/// Total drag coefficient: parasite + induced, plus a sharp increment
/// once the (lookup-clamped) angle of attack is past the stall angle.
pub fn drag_coefficient(
    coeffs: &AeroCoefficients,
    geometry: &AircraftGeometry,
    cl: f64,
    alpha_deg: f64,
    flaps: f64,
) -> f64 {
    let (_, _, stall_aoa) = flap_adjusted(coeffs, flaps);

    let cd_induced = cl * cl / (PI * coeffs.oswald_efficiency * geometry.aspect_ratio());

    let cd_stall = if alpha_deg.abs() > stall_aoa {
        let stall_excess = alpha_deg.abs() - stall_aoa;
        0.5 * (1.0 - (-0.1 * stall_excess).exp())
    } else {
        0.0
    };

    coeffs.cd_0 + cd_induced + cd_stall
}

/// Stall detection is AOA-based, never airspeed-based: extreme pitch at
/// normal airspeed must still warn. Uses the UNCLAMPED angle of attack.
pub fn stall_warning(coeffs: &AeroCoefficients, alpha_deg: f64, flaps: f64) -> bool {
    let (_, _, stall_aoa) = flap_adjusted(coeffs, flaps);
    alpha_deg >= stall_aoa
}

/// Computes lift, drag and control/stability moments in the body frame.
///
/// Directions are taken from the relative airflow, not the body axes:
/// drag is anti-parallel to the airflow, lift is perpendicular to it in
/// the aircraft's symmetry plane. In level flight that places lift along
/// world -z, opposing weight.
pub fn calculate_aero_forces_moments(
    geometry: &AircraftGeometry,
    coeffs: &AeroCoefficients,
    air_data: &AirData,
    controls: &ControlInputs,
    min_airspeed_threshold: f64,
) -> AeroOutputs {
    let alpha_deg = air_data.alpha.to_degrees();
    let stalled = stall_warning(coeffs, alpha_deg, controls.flaps);

    if air_data.dynamic_pressure <= 1e-6 || air_data.true_airspeed < min_airspeed_threshold {
        return AeroOutputs::quiet(alpha_deg, stalled);
    }

    let q_dyn = air_data.dynamic_pressure;
    let s = geometry.wing_area;
    let c = geometry.chord;

    // Coefficient lookup uses the clamped AOA; an unclamped lookup on
    // the linear model diverges at high AOA and produces runaway forces.
    let alpha_lookup = alpha_deg.clamp(-coeffs.aoa_limit_deg, coeffs.aoa_limit_deg);

    let cl = lift_coefficient(coeffs, alpha_lookup, controls.flaps);
    let cd = drag_coefficient(coeffs, geometry, cl, alpha_lookup, controls.flaps);

    let lift_magnitude = q_dyn * s * cl;
    let drag_magnitude = q_dyn * s * cd;

    let airflow_dir = air_data.relative_velocity / air_data.true_airspeed;
    let drag_body = -airflow_dir * drag_magnitude;

    // Lift axis: perpendicular to the airflow, in the symmetry plane,
    // pointing out the roof (body -z at small alpha)
    let lift_axis = Vector3::y().cross(&airflow_dir);
    let lift_body = if lift_axis.norm_squared() > 1e-9 {
        lift_axis.normalize() * lift_magnitude
    } else {
        // Airflow along the span; no meaningful lift direction
        Vector3::zeros()
    };

    // Control moments plus the pitch-stiffness restoring moment. Signs:
    // positive elevator pitches the nose up (+M about body y), positive
    // aileron rolls right (+L about body x), positive rudder yaws right
    // (+N about body z).
    let elevator_moment = q_dyn * s * c * coeffs.cm_deltae * controls.elevator;
    let aileron_moment = q_dyn * s * c * coeffs.cl_deltaa * controls.aileron;
    let rudder_moment = q_dyn * s * c * coeffs.cn_deltar * controls.rudder;

    let alpha_error = air_data.alpha - coeffs.equilibrium_alpha;
    let stability_moment = q_dyn * s * c * coeffs.cm_alpha * alpha_error;

    let moments_body = Vector3::new(
        aileron_moment,
        elevator_moment + stability_moment,
        rudder_moment,
    );

    AeroOutputs {
        lift_body,
        drag_body,
        moments_body,
        alpha_deg,
        cl,
        cd,
        stall_warning: stalled,
    }
}
