use flyer::{
    components::{AircraftSpec, AircraftState, SpatialComponent},
    systems::{FlightModel, IntegrationMethod},
    systems::physics::{calculate_net_forces, StepInputs},
    systems::aerodynamics::lift_coefficient,
    utils::{BodyAxes, GRAVITY},
};
use nalgebra::{UnitQuaternion, Vector3};
use std::path::PathBuf;
use std::sync::Arc;

/// Catalog shipped with the crate
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/aircraft.yaml")
}

/// Aircraft at rest at the given altitude
pub fn resting_state(altitude: f64) -> AircraftState {
    AircraftState::new(SpatialComponent::at_position(Vector3::new(0.0, 0.0, altitude)))
}

/// Wings-level flight heading north
pub fn level_state(altitude: f64, speed: f64) -> AircraftState {
    AircraftState::flying(
        Vector3::new(0.0, 0.0, altitude),
        UnitQuaternion::identity(),
        speed,
    )
}

pub fn glider_model(state: AircraftState, method: IntegrationMethod) -> FlightModel {
    FlightModel::new(Arc::new(AircraftSpec::glider()), state).with_method(method)
}

pub fn generic_model(state: AircraftState, method: IntegrationMethod) -> FlightModel {
    FlightModel::new(Arc::new(AircraftSpec::generic()), state).with_method(method)
}

/// Level flight condition where lift equals weight and thrust equals drag
#[derive(Debug, Clone, Copy)]
pub struct TrimCondition {
    pub speed: f64,
    pub throttle: f64,
}

/// Solves the wings-level trim at zero angle of attack
pub fn level_trim(spec: &AircraftSpec) -> TrimCondition {
    let cl = lift_coefficient(spec, 0.0);
    let speed = (spec.mass * GRAVITY / (spec.lift_factor() * cl)).sqrt();

    let state = level_state(1000.0, speed);
    let unpowered = calculate_net_forces(spec, &state.spatial, &StepInputs::default());
    let axes = BodyAxes::from_attitude(&state.spatial.attitude);
    let drag = -unpowered.force.dot(&axes.forward);

    TrimCondition {
        speed,
        throttle: drag / spec.max_thrust,
    }
}

/// Generic aircraft trimmed for level flight at the given altitude
pub fn trimmed_model(altitude: f64, method: IntegrationMethod) -> (FlightModel, TrimCondition) {
    let spec = Arc::new(AircraftSpec::generic());
    let trim = level_trim(&spec);
    let mut state = level_state(altitude, trim.speed);
    state.set_throttle(trim.throttle);
    (FlightModel::new(spec, state).with_method(method), trim)
}
