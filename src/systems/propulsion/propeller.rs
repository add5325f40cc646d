use crate::components::PropulsionConfig;
use crate::utils::constants::SEA_LEVEL_DENSITY;
use serde::{Deserialize, Serialize};

/// Engine/propeller state carried between steps
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropulsionState {
    /// Fraction of commanded thrust currently delivered [0, 1]
    pub thrust_fraction: f64,
    pub running: bool,
}

impl Default for PropulsionState {
    fn default() -> Self {
        Self {
            thrust_fraction: 0.0,
            running: false,
        }
    }
}

impl PropulsionState {
    /// State for an engine already running at a throttle setting, used
    /// when spawning in-flight
    pub fn at_throttle(throttle: f64) -> Self {
        Self {
            thrust_fraction: throttle.clamp(0.0, 1.0),
            running: throttle > 0.01,
        }
    }
}

/// First-order spool response towards the commanded throttle. The engine
/// starts once the lever moves off idle and stops when it is pulled back
/// to zero.
pub fn update_spool(
    state: &mut PropulsionState,
    config: &PropulsionConfig,
    throttle: f64,
    dt: f64,
) {
    if !state.running && throttle > 0.01 {
        state.running = true;
    } else if state.running && throttle <= 0.0 {
        state.running = false;
    }

    let target = if state.running { throttle } else { 0.0 };

    let time_constant = if target > state.thrust_fraction {
        config.spool_up_time
    } else {
        config.spool_down_time
    };

    if time_constant > 1e-6 {
        let decay = (-dt / time_constant).exp();
        state.thrust_fraction = target + (state.thrust_fraction - target) * decay;
    } else {
        state.thrust_fraction = target;
    }

    state.thrust_fraction = state.thrust_fraction.clamp(0.0, 1.0);
}

/// Propeller speed implied by the current spool state [rpm]. A stopped
/// engine spins at exactly zero.
pub fn propeller_rpm(config: &PropulsionConfig, state: &PropulsionState) -> f64 {
    if state.running {
        config.idle_rpm + state.thrust_fraction * (config.max_rpm - config.idle_rpm)
    } else {
        0.0
    }
}

/// Advance ratio J = V / (n D), the governing parameter of the thrust
/// curve
pub fn advance_ratio(airspeed: f64, rpm: f64, diameter: f64) -> f64 {
    let rps = rpm / 60.0;
    if rps > 0.0 && diameter > 0.0 {
        airspeed / (rps * diameter)
    } else {
        0.0
    }
}

/// Thrust delivered at a given propeller speed and airspeed [N].
///
/// Static thrust at J = 0, corrected for density, reduced quadratically
/// with advance ratio and floor-clamped at zero (no reverse thrust). At
/// zero rpm the thrust is exactly zero regardless of throttle.
pub fn thrust_at(config: &PropulsionConfig, rpm: f64, airspeed: f64, density: f64) -> f64 {
    if rpm <= 0.0 {
        return 0.0;
    }

    let j = advance_ratio(airspeed, rpm, config.prop_diameter);
    let j_factor = (1.0 - (j / config.j_zero_thrust).powi(2)).max(0.0);
    let density_ratio = (density / SEA_LEVEL_DENSITY).max(0.01);

    (config.max_static_thrust * density_ratio * j_factor).max(0.0)
}

/// Thrust for the current spool state [N], acting along body +x
pub fn compute_thrust(
    config: &PropulsionConfig,
    state: &PropulsionState,
    airspeed: f64,
    density: f64,
) -> f64 {
    let rpm = propeller_rpm(config, state);
    thrust_at(config, rpm, airspeed, density) * state.thrust_fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rpm_gives_exactly_zero_thrust() {
        let config = PropulsionConfig::cessna_172();
        assert_eq!(thrust_at(&config, 0.0, 0.0, 1.225), 0.0);
        assert_eq!(thrust_at(&config, 0.0, 50.0, 1.225), 0.0);

        // Engine off: full throttle lever still produces nothing
        let state = PropulsionState::default();
        assert_eq!(compute_thrust(&config, &state, 0.0, 1.225), 0.0);
    }

    #[test]
    fn test_static_thrust_at_zero_advance_ratio() {
        let config = PropulsionConfig::cessna_172();
        let thrust = thrust_at(&config, config.max_rpm, 0.0, 1.225);
        assert_relative_eq!(thrust, config.max_static_thrust, epsilon = 1e-9);
    }

    #[test]
    fn test_thrust_decreases_with_airspeed() {
        let config = PropulsionConfig::cessna_172();
        let mut last = f64::INFINITY;
        for airspeed in [0.0, 20.0, 40.0, 60.0, 80.0] {
            let thrust = thrust_at(&config, config.max_rpm, airspeed, 1.225);
            assert!(thrust < last || thrust == 0.0);
            assert!(thrust >= 0.0, "thrust must never be negative");
            last = thrust;
        }
    }

    #[test]
    fn test_thrust_floors_at_zero_past_j_limit() {
        let config = PropulsionConfig::cessna_172();
        // Well beyond the zero-thrust advance ratio
        let thrust = thrust_at(&config, config.max_rpm, 200.0, 1.225);
        assert_eq!(thrust, 0.0);
    }

    #[test]
    fn test_thrust_scales_with_density() {
        let config = PropulsionConfig::cessna_172();
        let sea_level = thrust_at(&config, config.max_rpm, 30.0, 1.225);
        let at_altitude = thrust_at(&config, config.max_rpm, 30.0, 0.9);
        assert!(at_altitude < sea_level);
    }

    #[test]
    fn test_advance_ratio() {
        // 2700 rpm = 45 rps; J = 30 / (45 * 1.905)
        assert_relative_eq!(
            advance_ratio(30.0, 2700.0, 1.905),
            30.0 / (45.0 * 1.905),
            epsilon = 1e-12
        );
        assert_eq!(advance_ratio(30.0, 0.0, 1.905), 0.0);
    }

    #[test]
    fn test_engine_spool_up() {
        let config = PropulsionConfig::cessna_172();
        let mut state = PropulsionState::default();

        update_spool(&mut state, &config, 1.0, 1.0);

        assert!(state.running);
        assert!(state.thrust_fraction > 0.0);
        assert!(state.thrust_fraction < 1.0);
    }

    #[test]
    fn test_engine_spool_down_and_cut() {
        let config = PropulsionConfig::cessna_172();
        let mut state = PropulsionState {
            thrust_fraction: 1.0,
            running: true,
        };

        update_spool(&mut state, &config, 0.0, 1.0);

        assert!(!state.running);
        assert!(state.thrust_fraction < 1.0);
        // Engine cut: the prop is no longer driven
        assert_eq!(propeller_rpm(&config, &state), 0.0);
    }

    #[test]
    fn test_spool_converges_to_command() {
        let config = PropulsionConfig::cessna_172();
        let mut state = PropulsionState::default();

        for _ in 0..2000 {
            update_spool(&mut state, &config, 0.75, 0.016);
        }
        assert_relative_eq!(state.thrust_fraction, 0.75, epsilon = 1e-3);
    }
}
