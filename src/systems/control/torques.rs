use nalgebra::Vector3;

use crate::components::{AircraftSpec, ControlSurfaces};

/// Body torque from the control surfaces.
///
/// Authority on an axis is withheld while the aircraft already turns in
/// the commanded direction faster than the terminal rate.
pub fn control_torque(
    spec: &AircraftSpec,
    controls: &ControlSurfaces,
    angular_velocity: &Vector3<f64>,
    airspeed: f64,
) -> Vector3<f64> {
    let input = controls.as_body_vector();
    let authority = spec.control.as_body_vector();

    Vector3::from_fn(|i, _| {
        if input[i] * angular_velocity[i] < spec.terminal_rates[i] {
            input[i] * authority[i] * airspeed
        } else {
            0.0
        }
    })
}

/// Body torque opposing the current rotation on every axis.
pub fn damping_torque(spec: &AircraftSpec, angular_velocity: &Vector3<f64>) -> Vector3<f64> {
    Vector3::from_fn(|i, _| {
        let rate = angular_velocity[i];
        let magnitude = (spec.damping[i] * rate).abs();
        if rate < 0.0 {
            magnitude
        } else {
            -magnitude
        }
    })
}
