use crate::common::*;
use approx::assert_relative_eq;
use flyer::{
    components::AircraftSpec,
    systems::physics::{calculate_net_forces, StepInputs},
    systems::IntegrationMethod,
};

#[test]
fn test_trim_balances_forces() {
    let (model, trim) = trimmed_model(1000.0, IntegrationMethod::default());
    let state = model.state();
    let inputs = StepInputs {
        controls: state.controls,
        throttle: state.throttle,
    };

    let net = calculate_net_forces(model.spec(), &state.spatial, &inputs);
    assert!(net.force.norm() < 1e-6, "residual force {:?}", net.force);
    assert!(net.torque.norm() < 1e-9, "residual torque {:?}", net.torque);

    assert!(trim.speed > 30.0 && trim.speed < 35.0, "trim speed {}", trim.speed);
    assert!(trim.throttle > 0.0 && trim.throttle < 1.0);
}

#[test]
fn test_trimmed_flight_holds_altitude() {
    for method in IntegrationMethod::ALL {
        let (mut model, trim) = trimmed_model(1000.0, method);
        for _ in 0..250 {
            model.update(0.02);
        }

        let spatial = &model.state().spatial;
        assert_spatial_valid(spatial);
        assert!(spatial.angular_velocity.norm() < 1e-9, "{:?}", method);
        assert!(spatial.velocity.z.abs() < 1e-6, "{:?}: v.z {}", method, spatial.velocity.z);
        assert_relative_eq!(spatial.position.z, 1000.0, epsilon = 1e-3);
        assert_relative_eq!(spatial.position.y, trim.speed * 5.0, epsilon = 1e-3);

        let readout = model.readout();
        assert_relative_eq!(readout.g_force.normal, 1.0, epsilon = 1e-6);
        assert_relative_eq!(readout.speed, trim.speed, epsilon = 1e-6);
        assert!(!readout.overspeed);
    }
}

#[test]
fn test_extra_throttle_accelerates() {
    let (mut model, trim) = trimmed_model(1000.0, IntegrationMethod::default());
    model.set_throttle(trim.throttle + 0.2);
    for _ in 0..50 {
        model.update(0.02);
    }
    assert!(model.state().spatial.speed() > trim.speed);
}

#[test]
fn test_glider_ignores_throttle() {
    let spec = AircraftSpec::glider();
    assert_eq!(spec.max_thrust, 0.0);

    let mut idle = glider_model(level_state(1000.0, 30.0), IntegrationMethod::default());
    let mut full = idle.clone();
    full.set_throttle(1.0);
    for _ in 0..50 {
        idle.update(0.02);
        full.update(0.02);
    }
    assert_eq!(idle.state().spatial, full.state().spatial);
}
