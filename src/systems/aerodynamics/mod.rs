mod air_data;
mod forces;

pub use air_data::{angle_of_attack, calculate_air_data, sideslip};
pub use forces::{
    aerodynamic_forces, form_drag, induced_drag, lift, lift_coefficient, profile_drag,
    side_force, AeroForces,
};
