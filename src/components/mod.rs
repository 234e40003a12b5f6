pub mod aircraft;
pub mod controls;
pub mod physics;
pub mod spatial;

pub use aircraft::{
    AirData, AircraftCatalog, AircraftSource, AircraftSpec, AircraftState, ConfigError,
    ControlCoefficients, ControlSurfaces, FlightReadout, GForce, PathDeviationCoefficients,
    RawAircraftSpec,
};
pub use controls::ControlAction;
pub use physics::ForceAccumulator;
pub use spatial::SpatialComponent;
