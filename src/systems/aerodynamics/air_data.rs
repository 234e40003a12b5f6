use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

use crate::components::AirData;
use crate::utils::{angle_between, direction_or_zero, BodyAxes, MIN_AIRSPEED};

/// Angle of attack: elevation of the nose above the flight path.
///
/// Zero when the airspeed is below the threshold.
pub fn angle_of_attack(velocity: &Vector3<f64>, axes: &BodyAxes) -> f64 {
    path_angle(velocity, &axes.up)
}

/// Sideslip: angle between the flight path and the plane of symmetry,
/// negative when the air comes from the right.
pub fn sideslip(velocity: &Vector3<f64>, axes: &BodyAxes) -> f64 {
    path_angle(velocity, &axes.right)
}

fn path_angle(velocity: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let direction = direction_or_zero(velocity);
    if direction == Vector3::zeros() {
        return 0.0;
    }
    angle_between(&direction, axis) - FRAC_PI_2
}

/// Air data for a still atmosphere.
pub fn calculate_air_data(velocity: &Vector3<f64>, axes: &BodyAxes) -> AirData {
    let airspeed = velocity.norm();
    if airspeed <= MIN_AIRSPEED {
        return AirData::default();
    }

    AirData {
        airspeed,
        alpha: angle_of_attack(velocity, axes),
        beta: sideslip(velocity, axes),
    }
}
