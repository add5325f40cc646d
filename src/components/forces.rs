use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    World,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
    Ground,
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

/// Per-step force and moment accumulator. Forces are resolved into the
/// world frame, moments into the body frame, using the attitude at the
/// time of resolution.
#[derive(Debug, Clone, Default)]
pub struct ForceAccumulator {
    forces: Vec<Force>,
    moments: Vec<Moment>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    pub fn clear(&mut self) {
        self.forces.clear();
        self.moments.clear();
    }

    /// Sum of all forces in the world frame and all moments in the body
    /// frame.
    pub fn resolve(&self, attitude: &UnitQuaternion<f64>) -> (Vector3<f64>, Vector3<f64>) {
        let mut net_force = Vector3::zeros();
        for force in &self.forces {
            net_force += match force.frame {
                ReferenceFrame::Body => attitude * force.vector,
                ReferenceFrame::World => force.vector,
            };
        }

        let mut net_moment = Vector3::zeros();
        for moment in &self.moments {
            net_moment += match moment.frame {
                ReferenceFrame::Body => moment.vector,
                ReferenceFrame::World => attitude.inverse() * moment.vector,
            };
        }

        (net_force, net_moment)
    }

    /// World-frame total of one force category
    pub fn category_total(
        &self,
        category: &ForceCategory,
        attitude: &UnitQuaternion<f64>,
    ) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == *category)
            .map(|f| match f.frame {
                ReferenceFrame::Body => attitude * f.vector,
                ReferenceFrame::World => f.vector,
            })
            .fold(Vector3::zeros(), |acc, v| acc + v)
    }
}

/// Diagnostic breakdown of one simulation step. Recomputed every step,
/// consumed by telemetry and tooling, never fed back into the next step.
///
/// All force vectors are world frame [N]; `net_moment` is body frame [N m].
#[derive(Debug, Clone, Serialize)]
pub struct ForceSample {
    pub thrust: Vector3<f64>,
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub weight: Vector3<f64>,
    pub ground: Vector3<f64>,
    pub external: Vector3<f64>,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    /// Acceleration implied by the force sum [m/s^2]
    pub accel_from_forces: Vector3<f64>,
    /// Acceleration the integrator actually applied [m/s^2]
    pub integrated_accel: Vector3<f64>,
}

impl ForceSample {
    /// Magnitude of the force/acceleration mismatch. Anything beyond
    /// floating-point noise indicates a core defect.
    pub fn consistency_error(&self) -> f64 {
        (self.accel_from_forces - self.integrated_accel).norm()
    }
}

impl Default for ForceSample {
    fn default() -> Self {
        Self {
            thrust: Vector3::zeros(),
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            weight: Vector3::zeros(),
            ground: Vector3::zeros(),
            external: Vector3::zeros(),
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            accel_from_forces: Vector3::zeros(),
            integrated_accel: Vector3::zeros(),
        }
    }
}
