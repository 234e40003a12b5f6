use bevy::log::debug;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::utils::NORMALIZATION_EPSILON;

/// Linear (world) and angular (body) accelerations of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accelerations {
    pub linear: Vector3<f64>,
    pub angular: Vector3<f64>,
}

impl Default for Accelerations {
    fn default() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }
}

/// Fixed-step integration schemes.
///
/// Every scheme treats the angular triple like the linear one; the
/// attitude advances by the body-frame rotation increment `θ` as
/// `q ← q ∘ exp(θ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Explicit Euler
    Euler,
    /// Semi-implicit Euler, position from the updated velocity
    EulerCromer,
    /// Velocity Verlet with loads evaluated at the old velocity
    VelocityVerlet,
    /// Velocity Verlet with loads evaluated at the half-step velocity
    #[default]
    ModifiedVelocityVerlet,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 4] = [
        IntegrationMethod::Euler,
        IntegrationMethod::EulerCromer,
        IntegrationMethod::VelocityVerlet,
        IntegrationMethod::ModifiedVelocityVerlet,
    ];

    /// Advances `spatial` by `dt`.
    ///
    /// `evaluate` returns the accelerations for a kinematic snapshot. The
    /// Verlet schemes read the acceleration stored in `spatial` as `a(t)`,
    /// so it must have been primed by an evaluation at the start state.
    pub fn step<F>(&self, spatial: &SpatialComponent, dt: f64, mut evaluate: F) -> SpatialComponent
    where
        F: FnMut(&SpatialComponent) -> Accelerations,
    {
        let mut next = match self {
            IntegrationMethod::Euler => {
                let acc = evaluate(spatial);
                SpatialComponent {
                    position: spatial.position + spatial.velocity * dt,
                    velocity: spatial.velocity + acc.linear * dt,
                    acceleration: acc.linear,
                    attitude: rotate(&spatial.attitude, &(spatial.angular_velocity * dt)),
                    angular_velocity: spatial.angular_velocity + acc.angular * dt,
                    angular_acceleration: acc.angular,
                }
            }
            IntegrationMethod::EulerCromer => {
                let acc = evaluate(spatial);
                let velocity = spatial.velocity + acc.linear * dt;
                let angular_velocity = spatial.angular_velocity + acc.angular * dt;
                SpatialComponent {
                    position: spatial.position + velocity * dt,
                    velocity,
                    acceleration: acc.linear,
                    attitude: rotate(&spatial.attitude, &(angular_velocity * dt)),
                    angular_velocity,
                    angular_acceleration: acc.angular,
                }
            }
            IntegrationMethod::VelocityVerlet => {
                let mut predicted = drift(spatial, dt);
                predicted.velocity = spatial.velocity;
                predicted.angular_velocity = spatial.angular_velocity;

                let acc = evaluate(&predicted);
                predicted.velocity = spatial.velocity + (spatial.acceleration + acc.linear) * dt * 0.5;
                predicted.angular_velocity = spatial.angular_velocity
                    + (spatial.angular_acceleration + acc.angular) * dt * 0.5;
                predicted.acceleration = acc.linear;
                predicted.angular_acceleration = acc.angular;
                predicted
            }
            IntegrationMethod::ModifiedVelocityVerlet => {
                let mut half = drift(spatial, dt);
                half.velocity = spatial.velocity + spatial.acceleration * dt * 0.5;
                half.angular_velocity =
                    spatial.angular_velocity + spatial.angular_acceleration * dt * 0.5;

                let acc = evaluate(&half);
                half.velocity += acc.linear * dt * 0.5;
                half.angular_velocity += acc.angular * dt * 0.5;
                half.acceleration = acc.linear;
                half.angular_acceleration = acc.angular;
                half
            }
        };

        next.attitude = renormalize(next.attitude);
        next
    }
}

/// Position and attitude after `dt` under constant acceleration.
fn drift(spatial: &SpatialComponent, dt: f64) -> SpatialComponent {
    let half_dt2 = dt * dt * 0.5;
    let theta = spatial.angular_velocity * dt + spatial.angular_acceleration * half_dt2;
    SpatialComponent {
        position: spatial.position + spatial.velocity * dt + spatial.acceleration * half_dt2,
        attitude: rotate(&spatial.attitude, &theta),
        ..spatial.clone()
    }
}

/// Applies a body-frame rotation increment.
fn rotate(attitude: &UnitQuaternion<f64>, theta: &Vector3<f64>) -> UnitQuaternion<f64> {
    attitude * UnitQuaternion::from_scaled_axis(*theta)
}

/// Pulls the quaternion back onto the unit sphere once drift exceeds the tolerance.
pub fn renormalize(attitude: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    let norm = attitude.quaternion().norm();
    if (norm - 1.0).abs() > NORMALIZATION_EPSILON {
        debug!("Renormalizing attitude quaternion with norm {}", norm);
        UnitQuaternion::new_normalize(attitude.into_inner())
    } else {
        attitude
    }
}

/// Non-penetration clamp: below the ground the vertical triple is zeroed.
///
/// Returns true when the clamp engaged.
pub fn apply_ground_contact(spatial: &mut SpatialComponent) -> bool {
    if spatial.position.z < 0.0 {
        spatial.position.z = 0.0;
        spatial.velocity.z = 0.0;
        spatial.acceleration.z = 0.0;
        true
    } else {
        false
    }
}
