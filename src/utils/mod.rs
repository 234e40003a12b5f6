pub mod constants;
pub mod errors;
pub mod interpolation;
pub mod math;

pub use constants::*;
pub use errors::*;
pub use interpolation::InterpolationTable;
pub use math::*;
