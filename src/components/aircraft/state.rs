use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{ControlAction, SpatialComponent};
use crate::utils::{MAX_DEFLECTION, THROTTLE_STEP};

/// Mutable state of one simulated aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AircraftState {
    /// Position, attitude and their derivatives.
    pub spatial: SpatialComponent,
    /// Air data measured during the last sub-step.
    pub air_data: AirData,
    /// Throttle fraction in [0, 1].
    pub throttle: f64,
    /// Transient deflections, cleared after every sub-step.
    pub controls: ControlSurfaces,
}

impl AircraftState {
    pub fn new(spatial: SpatialComponent) -> Self {
        Self {
            spatial,
            ..Default::default()
        }
    }

    /// Level flight along the world direction given by `attitude`.
    pub fn flying(position: Vector3<f64>, attitude: UnitQuaternion<f64>, speed: f64) -> Self {
        let velocity = attitude * Vector3::y() * speed;
        Self::new(SpatialComponent::new(
            position,
            velocity,
            attitude,
            Vector3::zeros(),
        ))
    }

    /// Applies one control action.
    ///
    /// Surface actions set the deflection for the next sub-step; throttle
    /// actions move the throttle by one step, clamped to [0, 1].
    pub fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::PitchUp | ControlAction::PitchDown => {
                self.controls.elevator = action.deflection().unwrap_or(0.0);
            }
            ControlAction::RollLeft | ControlAction::RollRight => {
                self.controls.aileron = action.deflection().unwrap_or(0.0);
            }
            ControlAction::HeadingLeft | ControlAction::HeadingRight => {
                self.controls.rudder = action.deflection().unwrap_or(0.0);
            }
            ControlAction::ThrustAdd => self.set_throttle(self.throttle + THROTTLE_STEP),
            ControlAction::ThrustSubtract => self.set_throttle(self.throttle - THROTTLE_STEP),
        }
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }
}

/// Normalized control surface deflections in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ControlSurfaces {
    /// Positive raises the nose
    pub elevator: f64,
    /// Positive rolls right
    pub aileron: f64,
    /// Positive yaws left
    pub rudder: f64,
}

impl ControlSurfaces {
    pub fn new(elevator: f64, aileron: f64, rudder: f64) -> Self {
        Self {
            elevator: elevator.clamp(-MAX_DEFLECTION, MAX_DEFLECTION),
            aileron: aileron.clamp(-MAX_DEFLECTION, MAX_DEFLECTION),
            rudder: rudder.clamp(-MAX_DEFLECTION, MAX_DEFLECTION),
        }
    }

    /// Deflections laid out along the body axes (pitch, roll, yaw).
    pub fn as_body_vector(&self) -> Vector3<f64> {
        Vector3::new(self.elevator, self.aileron, self.rudder)
    }

    pub fn is_neutral(&self) -> bool {
        self.elevator == 0.0 && self.aileron == 0.0 && self.rudder == 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Aerodynamic angles and airspeed of the last sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AirData {
    /// Airspeed (m/s), still air
    pub airspeed: f64,
    /// Angle of attack α (rad)
    pub alpha: f64,
    /// Sideslip β (rad)
    pub beta: f64,
}
