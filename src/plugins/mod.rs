mod flight;
mod transformation;

pub use flight::{spawn_aircraft, ControlEvent, FlightPlugin, FlightSet};
pub use transformation::TransformationPlugin;
