use crate::resources::Frame;
use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

/// Trait for converting positions between the world and render frames
pub trait PositionTransform {
    /// Rotate a position from one frame to another, without scaling
    fn transform_position(&self, position: &Vector3<f64>, from: Frame, to: Frame) -> Vector3<f64>;

    /// Transform a world position to scaled render coordinates (f32)
    fn to_render_coords(&self, position: &Vector3<f64>) -> Vec3;
}

/// Trait for converting body attitudes into the render frame
pub trait AttitudeTransform {
    /// Render rotation of a body attitude (f32)
    fn to_render_rotation(&self, attitude: &UnitQuaternion<f64>) -> Quat;
}

/// Errors that can occur while setting up the transformation
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Scale factor {0} is not finite and positive")]
    InvalidScale(f64),
}
