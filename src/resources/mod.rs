pub mod config;
pub mod transformations;

pub use config::PhysicsConfig;
pub use transformations::{
    AttitudeTransform, Frame, PositionTransform, TransformError, TransformationResource,
};
