use nalgebra::Vector3;

use crate::components::{AirData, AircraftSpec};
use crate::utils::{direction_or_zero, BodyAxes};

/// Aerodynamic forces of one sub-step, world frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
    pub profile_drag: Vector3<f64>,
    pub form_drag: Vector3<f64>,
    pub side_force: Vector3<f64>,
}

impl AeroForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.induced_drag + self.profile_drag + self.form_drag + self.side_force
    }
}

/// Lift coefficient at `alpha`; validated specs always answer.
pub fn lift_coefficient(spec: &AircraftSpec, alpha: f64) -> f64 {
    spec.lift_vs_alpha.value_at(alpha).unwrap_or(0.0)
}

/// Lift, perpendicular to the flight path in the plane of symmetry.
pub fn lift(spec: &AircraftSpec, velocity: &Vector3<f64>, axes: &BodyAxes, alpha: f64) -> Vector3<f64> {
    let direction = axes.right.cross(&direction_or_zero(velocity));
    direction * velocity.norm_squared() * spec.lift_factor() * lift_coefficient(spec, alpha)
}

/// Drag due to lift, `Cl² / (π·AR·e)`, opposing the velocity.
pub fn induced_drag(spec: &AircraftSpec, velocity: &Vector3<f64>, alpha: f64) -> Vector3<f64> {
    let cl = lift_coefficient(spec, alpha);
    let cdi = cl * cl / spec.induced_drag_denominator();
    -velocity * velocity.norm() * spec.lift_factor() * cdi
}

/// Quadratic drag along each body axis.
pub fn profile_drag(spec: &AircraftSpec, velocity: &Vector3<f64>, axes: &BodyAxes) -> Vector3<f64> {
    let factors = spec.drag_factors();
    [axes.right, axes.forward, axes.up]
        .iter()
        .zip(factors.iter())
        .map(|(axis, factor)| {
            let speed = velocity.dot(axis);
            axis * speed * speed.abs() * *factor
        })
        .sum()
}

/// Drag from the optional drag-vs-alpha table.
pub fn form_drag(spec: &AircraftSpec, velocity: &Vector3<f64>, alpha: f64) -> Vector3<f64> {
    match &spec.drag_vs_alpha {
        Some(table) => {
            let cd = table.value_at(alpha).unwrap_or(0.0);
            -direction_or_zero(velocity) * velocity.norm_squared() * spec.lift_factor() * cd
        }
        None => Vector3::zeros(),
    }
}

/// Force along the right axis from the optional sideslip table.
pub fn side_force(spec: &AircraftSpec, velocity: &Vector3<f64>, axes: &BodyAxes, beta: f64) -> Vector3<f64> {
    match &spec.side_force_vs_beta {
        Some(table) => {
            let cy = table.value_at(beta).unwrap_or(0.0);
            axes.right * velocity.norm_squared() * spec.lift_factor() * cy
        }
        None => Vector3::zeros(),
    }
}

/// All aerodynamic forces; `air` carries the angles computed once per sub-step.
pub fn aerodynamic_forces(
    spec: &AircraftSpec,
    velocity: &Vector3<f64>,
    axes: &BodyAxes,
    air: &AirData,
) -> AeroForces {
    AeroForces {
        lift: lift(spec, velocity, axes, air.alpha),
        induced_drag: induced_drag(spec, velocity, air.alpha),
        profile_drag: profile_drag(spec, velocity, axes),
        form_drag: form_drag(spec, velocity, air.alpha),
        side_force: side_force(spec, velocity, axes, air.beta),
    }
}
