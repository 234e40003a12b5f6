mod path_deviation;
mod propulsion;
mod torques;

pub use path_deviation::path_deviation;
pub use propulsion::{gravity, thrust};
pub use torques::{control_torque, damping_torque};
