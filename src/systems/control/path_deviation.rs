use nalgebra::Vector3;

use crate::components::{AirData, AircraftSpec};
use crate::utils::BodyAxes;

/// Coupling between nose and flight path, as (world force, body torque).
///
/// The torque turns the nose toward the velocity while the force turns
/// the velocity toward the nose. Both scale with airspeed and vanish for
/// specs without path coupling.
pub fn path_deviation(
    spec: &AircraftSpec,
    axes: &BodyAxes,
    air: &AirData,
) -> (Vector3<f64>, Vector3<f64>) {
    let Some(coefficients) = &spec.path_deviation else {
        return (Vector3::zeros(), Vector3::zeros());
    };

    let pitch = air.alpha;
    let heading = air.beta;
    let speed = air.airspeed;

    let torque = Vector3::new(
        -pitch * coefficients.pitch_torque * speed,
        0.0,
        heading * coefficients.heading_torque * speed,
    );
    let force = axes.up * pitch * coefficients.pitch_force * speed
        + axes.right * heading * coefficients.heading_force * speed;

    (force, torque)
}
