use crate::components::SpatialComponent;
use crate::resources::transformations::traits::*;
use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    World,  // East-North-Up frame: x-east, y-north, z-up
    Render, // Bevy render frame: x-right, y-up, -z forward
}

/// Resource that handles conversion from simulation to render coordinates
#[derive(Resource, Debug, Clone)]
pub struct TransformationResource {
    /// Scale factor in meters per render unit
    meters_per_unit: f64,
    /// Rotation from World to Render
    world_to_render: UnitQuaternion<f64>,
}

impl Default for TransformationResource {
    fn default() -> Self {
        // World Up becomes Render Y and World North becomes Render -Z,
        // a -90° turn about the shared X (east/right) axis
        Self {
            meters_per_unit: 1.0,
            world_to_render: UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
        }
    }
}

impl TransformationResource {
    /// Create a new transformation resource with a specific scale
    pub fn new(meters_per_unit: f64) -> Result<Self, TransformError> {
        if !meters_per_unit.is_finite() || meters_per_unit <= 0.0 {
            return Err(TransformError::InvalidScale(meters_per_unit));
        }
        Ok(Self {
            meters_per_unit,
            ..Default::default()
        })
    }

    /// Get the rotation between the fixed frames
    fn rotation(&self, from: Frame, to: Frame) -> UnitQuaternion<f64> {
        match (from, to) {
            (Frame::World, Frame::Render) => self.world_to_render,
            (Frame::Render, Frame::World) => self.world_to_render.inverse(),
            _ => UnitQuaternion::identity(),
        }
    }

    /// Bevy transform for a kinematic state
    pub fn to_transform(&self, spatial: &SpatialComponent) -> Transform {
        Transform {
            translation: self.to_render_coords(&spatial.position),
            rotation: self.to_render_rotation(&spatial.attitude),
            scale: Vec3::ONE,
        }
    }

    fn scale_to_units(&self, position: &Vector3<f64>) -> Vec3 {
        Vec3::new(
            (position.x / self.meters_per_unit) as f32,
            (position.y / self.meters_per_unit) as f32,
            (position.z / self.meters_per_unit) as f32,
        )
    }
}

impl PositionTransform for TransformationResource {
    fn transform_position(&self, position: &Vector3<f64>, from: Frame, to: Frame) -> Vector3<f64> {
        self.rotation(from, to) * position
    }

    fn to_render_coords(&self, position: &Vector3<f64>) -> Vec3 {
        self.scale_to_units(&self.transform_position(position, Frame::World, Frame::Render))
    }
}

impl AttitudeTransform for TransformationResource {
    fn to_render_rotation(&self, attitude: &UnitQuaternion<f64>) -> Quat {
        let q = self.world_to_render * attitude * self.world_to_render.inverse();
        Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32).normalize()
    }
}
