pub mod aerodynamics;
pub mod control;
pub mod flight;
pub mod physics;

pub use flight::{control_input_system, flight_setup_system, flight_step_system};
pub use physics::{update_fleet, FlightModel, IntegrationMethod, StepAccumulator, StepReport};
