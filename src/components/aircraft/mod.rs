pub mod config;
pub mod readout;
pub mod state;

pub use config::{
    AircraftCatalog, AircraftSource, AircraftSpec, ConfigError, ControlCoefficients,
    PathDeviationCoefficients, RawAircraftSpec,
};
pub use readout::{FlightReadout, GForce};
pub use state::{AirData, AircraftState, ControlSurfaces};
