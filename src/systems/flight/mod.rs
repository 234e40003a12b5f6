mod control_input;
mod step;

pub use control_input::control_input_system;
pub use step::{flight_setup_system, flight_step_system};
