use serde::{Deserialize, Serialize};

/// Geometric properties of the airframe
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Wing reference area [m^2]
    pub wing_area: f64,
    /// Wing span [m]
    pub wing_span: f64,
    /// Mean aerodynamic chord [m]
    pub chord: f64,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64, chord: f64) -> Self {
        Self {
            wing_area,
            wing_span,
            chord,
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            wing_area: 16.2,
            wing_span: 11.0,
            chord: 1.5,
        }
    }

    /// Aspect ratio b^2 / S, used by the induced-drag polar
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::cessna_172()
    }
}
