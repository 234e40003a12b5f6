use nalgebra::Vector3;

use crate::components::{AircraftSpec, ControlSurfaces, ForceAccumulator, SpatialComponent};
use crate::systems::aerodynamics::{aerodynamic_forces, calculate_air_data};
use crate::systems::control::{control_torque, damping_torque, gravity, path_deviation, thrust};
use crate::systems::physics::Accelerations;
use crate::utils::BodyAxes;

/// Inputs held constant over one sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepInputs {
    pub controls: ControlSurfaces,
    pub throttle: f64,
}

/// Net force (world) and torque (body) acting on the aircraft at `spatial`.
pub fn calculate_net_forces(
    spec: &AircraftSpec,
    spatial: &SpatialComponent,
    inputs: &StepInputs,
) -> ForceAccumulator {
    let axes = BodyAxes::from_attitude(&spatial.attitude);
    let velocity = spatial.velocity;
    let air = calculate_air_data(&velocity, &axes);
    let mut net = ForceAccumulator::new();

    net.add_force(aerodynamic_forces(spec, &velocity, &axes, &air).total());
    net.add_force(thrust(spec, &axes, inputs.throttle));
    net.add_force(gravity(spec));

    net.add_torque(control_torque(
        spec,
        &inputs.controls,
        &spatial.angular_velocity,
        air.airspeed,
    ));
    net.add_torque(damping_torque(spec, &spatial.angular_velocity));

    let (coupling_force, coupling_torque) = path_deviation(spec, &axes, &air);
    net.add_force(coupling_force);
    net.add_torque(coupling_torque);

    apply_ground_reaction(&mut net, &spatial.position);
    net
}

/// On or below the ground the surface carries any downward load.
pub fn apply_ground_reaction(net: &mut ForceAccumulator, position: &Vector3<f64>) {
    if position.z <= 0.0 && net.force.z < 0.0 {
        net.force.z = 0.0;
    }
}

/// Linear (world) and angular (body) accelerations from the net loads.
pub fn calculate_accelerations(
    spec: &AircraftSpec,
    spatial: &SpatialComponent,
    inputs: &StepInputs,
) -> Accelerations {
    let net = calculate_net_forces(spec, spatial, inputs);
    Accelerations {
        linear: net.force / spec.mass,
        angular: net.torque.component_div(&spec.inertia),
    }
}
