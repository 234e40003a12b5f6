mod driver;
mod fleet;
mod force_calculator;
mod integrator;

pub use driver::{FlightModel, StepAccumulator, StepReport};
pub use fleet::update_fleet;
pub use force_calculator::{
    apply_ground_reaction, calculate_accelerations, calculate_net_forces, StepInputs,
};
pub use integrator::{apply_ground_contact, renormalize, Accelerations, IntegrationMethod};
