use bevy::prelude::*;

use crate::resources::TransformationResource;

/// Plugin that sets up the world to render coordinate conversion
pub struct TransformationPlugin {
    meters_per_unit: f64,
}

impl TransformationPlugin {
    /// Create a new plugin with the given scale
    pub fn new(meters_per_unit: f64) -> Self {
        Self { meters_per_unit }
    }
}

impl Default for TransformationPlugin {
    fn default() -> Self {
        Self {
            meters_per_unit: 1.0,
        }
    }
}

impl Plugin for TransformationPlugin {
    fn build(&self, app: &mut App) {
        match TransformationResource::new(self.meters_per_unit) {
            Ok(resource) => {
                app.insert_resource(resource);
            }
            Err(e) => {
                error!(
                    "Failed to create transformation resource: {}. Defaulting to scale = 1.0",
                    e
                );
                app.insert_resource(TransformationResource::default());
            }
        }
    }
}
