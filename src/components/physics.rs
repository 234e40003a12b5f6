use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Net force and torque gathered during a single sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceAccumulator {
    /// Net force in world frame [N]
    pub force: Vector3<f64>,
    /// Net torque in body frame [N·m]
    pub torque: Vector3<f64>,
}

impl Default for ForceAccumulator {
    fn default() -> Self {
        Self {
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Vector3<f64>) {
        self.force += force;
    }

    pub fn add_torque(&mut self, torque: Vector3<f64>) {
        self.torque += torque;
    }

    pub fn clear(&mut self) {
        self.force = Vector3::zeros();
        self.torque = Vector3::zeros();
    }
}
