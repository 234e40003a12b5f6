use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::constants::MIN_AIRSPEED;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Angle between two vectors in `[0, π]`.
///
/// Returns 0 when either vector has no length, so callers never see NaN.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let norms = a.norm() * b.norm();
    if norms <= f64::EPSILON {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(-1.0, 1.0).acos()
}

/// Unit direction of `v`, or the zero vector below the airspeed threshold.
pub fn direction_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let speed = v.norm();
    if speed > MIN_AIRSPEED {
        v / speed
    } else {
        Vector3::zeros()
    }
}

/// Orthonormal body axes expressed in the world frame.
///
/// Body x is right, y is forward and z is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAxes {
    pub forward: Vector3<f64>,
    pub up: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl BodyAxes {
    pub fn from_attitude(attitude: &UnitQuaternion<f64>) -> Self {
        Self {
            forward: attitude * Vector3::y(),
            up: attitude * Vector3::z(),
            right: attitude * Vector3::x(),
        }
    }
}

/// Heading, pitch and roll (radians) of an attitude.
///
/// Heading is positive turning the nose left, pitch positive nose up and
/// roll positive with the right wing down.
pub fn heading_pitch_roll(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    let axes = BodyAxes::from_attitude(attitude);
    let heading = (-axes.forward.x).atan2(axes.forward.y);
    let pitch = axes.forward.z.clamp(-1.0, 1.0).asin();
    let roll = (-axes.right.z).atan2(axes.up.z);
    Vector3::new(heading, pitch, roll)
}
