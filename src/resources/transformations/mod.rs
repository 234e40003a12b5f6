mod frames;
mod traits;

pub use frames::{Frame, TransformationResource};
pub use traits::{AttitudeTransform, PositionTransform, TransformError};
