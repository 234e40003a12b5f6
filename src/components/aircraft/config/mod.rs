mod loader;
mod spec;

pub use loader::{AircraftCatalog, AircraftSource, ConfigError, RawAircraftSpec};
pub use spec::{AircraftSpec, ControlCoefficients, PathDeviationCoefficients};
