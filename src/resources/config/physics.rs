use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::systems::physics::{IntegrationMethod, StepAccumulator};
use crate::utils::{SimError, DEFAULT_MAX_SUBSTEPS, DEFAULT_STEP_SIZE};

/// Fixed-step settings applied to every aircraft spawned by the plugin.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Simulated seconds per sub-step
    pub step_size: f64,
    /// Sub-steps allowed per host frame before pending time is dropped
    pub max_substeps: u32,
    pub integrator: IntegrationMethod,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
            integrator: IntegrationMethod::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "step_size must be finite and positive, got {}",
                self.step_size
            )));
        }
        if self.max_substeps == 0 {
            return Err(SimError::InvalidConfig(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn clock(&self) -> StepAccumulator {
        StepAccumulator::new(self.step_size, self.max_substeps)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
