use aerocore::components::{AircraftConfig, ControlInputs, SpatialComponent};
use aerocore::FlightModel;
use nalgebra::{UnitQuaternion, Vector3};

pub const DT: f64 = 0.016;

/// Trainer fixture used by the scenario tests
pub fn test_aircraft() -> AircraftConfig {
    AircraftConfig::cessna_172()
}

pub fn throttle_only(throttle: f64) -> ControlInputs {
    ControlInputs {
        throttle,
        ..Default::default()
    }
}

/// Pitch attitude at which lift balances weight in level flight
pub fn trim_pitch(config: &AircraftConfig, speed: f64) -> f64 {
    let q = 0.5 * 1.225 * speed * speed;
    let cl_required = config.mass.mass * 9.81 / (q * config.geometry.wing_area);
    ((cl_required - config.aero.cl_0) / config.aero.cl_alpha).to_radians()
}

/// Model trimmed for level flight at the given speed and altitude
pub fn trimmed_model(speed: f64, altitude: f64, throttle: f64) -> FlightModel {
    let config = test_aircraft();
    let mut model = FlightModel::new(config).unwrap();
    let pitch = trim_pitch(model.config(), speed);
    model.reset_in_flight(
        SpatialComponent {
            position: Vector3::new(0.0, 0.0, -altitude),
            velocity: Vector3::new(speed, 0.0, 0.0),
            attitude: UnitQuaternion::from_euler_angles(0.0, pitch, 0.0),
            angular_velocity: Vector3::zeros(),
        },
        throttle,
    );
    model
}
