use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mass and (diagonal) inertia properties. Products of inertia are
/// deliberately omitted: the integrator runs a simplified per-axis
/// angular model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MassModel {
    /// Gross mass [kg]
    pub mass: f64,
    /// Roll moment of inertia about body x [kg m^2]
    pub ixx: f64,
    /// Pitch moment of inertia about body y [kg m^2]
    pub iyy: f64,
    /// Yaw moment of inertia about body z [kg m^2]
    pub izz: f64,
}

impl MassModel {
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            mass: 1111.0,
            ixx: 1285.3,
            iyy: 1824.9,
            izz: 2666.9,
        }
    }

    pub fn inertia_diagonal(&self) -> Vector3<f64> {
        Vector3::new(self.ixx, self.iyy, self.izz)
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self::cessna_172()
    }
}
