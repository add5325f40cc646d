use serde::{Deserialize, Serialize};

/// Lift, drag, control and damping coefficients for the simplified
/// coefficient-based aerodynamic model.
///
/// The lift curve is linear in angle of attack up to the stall angle,
/// then decays; the drag polar is parasite + induced with a post-stall
/// increment. All per-degree slopes take the angle of attack in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Zero-AOA lift coefficient (wing camber)
    pub cl_0: f64,
    /// Lift curve slope per degree of AOA
    pub cl_alpha: f64,
    /// Maximum lift coefficient, clean configuration
    pub cl_max: f64,
    /// Parasite drag coefficient
    pub cd_0: f64,
    /// Oswald efficiency factor for the induced-drag polar
    pub oswald_efficiency: f64,

    /// Stall angle of attack, clean configuration [deg]
    pub stall_aoa_deg: f64,
    /// Exponential CL decay rate past stall [1/deg]
    pub post_stall_decay: f64,
    /// Post-stall CL floor
    pub post_stall_cl_min: f64,

    /// Coefficient lookups are clamped to +/- this AOA [deg]. The
    /// reported angle of attack is never clamped.
    pub aoa_limit_deg: f64,

    /// CL increase per unit of flap deflection
    pub cl_flap_delta: f64,
    /// Maximum lift coefficient with full flaps
    pub cl_max_flaps: f64,
    /// Stall AOA reduction at full flaps [deg]
    pub flap_stall_reduction_deg: f64,

    /// Elevator pitching-moment effectiveness |Cm_deltae|
    pub cm_deltae: f64,
    /// Aileron rolling-moment effectiveness
    pub cl_deltaa: f64,
    /// Rudder yawing-moment effectiveness
    pub cn_deltar: f64,
    /// Pitch stiffness Cm_alpha [1/rad], negative for a stable airframe
    pub cm_alpha: f64,
    /// Equilibrium angle of attack for the stiffness term [rad]
    pub equilibrium_alpha: f64,

    /// Pitch rate damping Cmq, negative so the moment opposes the rate
    pub pitch_damping: f64,
    /// Roll rate damping Clp
    pub roll_damping: f64,
    /// Yaw rate damping Cnr
    pub yaw_damping: f64,
}

impl AeroCoefficients {
    pub fn cessna_172() -> Self {
        Self {
            cl_0: 0.30,
            cl_alpha: 0.105,
            cl_max: 1.6,
            cd_0: 0.027,
            oswald_efficiency: 0.7,
            stall_aoa_deg: 17.0,
            post_stall_decay: 0.05,
            post_stall_cl_min: 0.4,
            aoa_limit_deg: 15.0,
            cl_flap_delta: 0.5,
            cl_max_flaps: 2.1,
            flap_stall_reduction_deg: 2.0,
            cm_deltae: 0.4,
            cl_deltaa: 0.15,
            cn_deltar: 0.10,
            cm_alpha: -0.35,
            equilibrium_alpha: 0.035,
            pitch_damping: -25.0,
            roll_damping: -8.0,
            yaw_damping: -6.0,
        }
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::cessna_172()
    }
}
