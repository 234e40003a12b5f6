use nalgebra::Vector3;

use crate::components::AircraftSpec;
use crate::utils::{BodyAxes, GRAVITY};

/// Engine thrust along the nose.
pub fn thrust(spec: &AircraftSpec, axes: &BodyAxes, throttle: f64) -> Vector3<f64> {
    axes.forward * throttle * spec.max_thrust
}

/// Weight, world frame.
pub fn gravity(spec: &AircraftSpec) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -GRAVITY * spec.mass)
}
