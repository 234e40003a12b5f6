use bevy::log::warn;
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::components::{AircraftSpec, AircraftState, ControlAction, FlightReadout};
use crate::systems::aerodynamics::calculate_air_data;
use crate::systems::physics::{
    apply_ground_contact, calculate_accelerations, IntegrationMethod, StepInputs,
};
use crate::utils::{BodyAxes, DEFAULT_MAX_SUBSTEPS, DEFAULT_STEP_SIZE, STEP_TOLERANCE};

/// Fixed-step time accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepAccumulator {
    accumulator: f64,
    /// Simulated seconds per sub-step
    pub step_size: f64,
    /// Sub-steps allowed per host frame
    pub max_substeps: u32,
}

impl Default for StepAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_SIZE, DEFAULT_MAX_SUBSTEPS)
    }
}

impl StepAccumulator {
    pub fn new(step_size: f64, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step_size,
            max_substeps,
        }
    }

    /// Time carried over to the next host frame.
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Adds host frame time; negative or non-finite values are ignored.
    pub fn accumulate(&mut self, elapsed: f64) -> bool {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return false;
        }
        self.accumulator += elapsed;
        true
    }

    pub fn has_full_step(&self) -> bool {
        self.accumulator >= self.step_size - STEP_TOLERANCE
    }

    /// Takes one step worth of time if available.
    pub fn consume_step(&mut self) -> bool {
        if !self.has_full_step() {
            return false;
        }
        self.accumulator = (self.accumulator - self.step_size).max(0.0);
        true
    }

    /// Discards all pending time, returning how much was dropped.
    pub fn drain(&mut self) -> f64 {
        std::mem::take(&mut self.accumulator)
    }
}

/// Outcome of one host frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// Sub-steps run
    pub substeps: u32,
    /// Seconds discarded by the sub-step cap
    pub dropped: f64,
}

/// One simulated aircraft: shared spec, own state and clock.
#[derive(Component, Debug, Clone)]
pub struct FlightModel {
    spec: Arc<AircraftSpec>,
    state: AircraftState,
    clock: StepAccumulator,
    method: IntegrationMethod,
}

impl FlightModel {
    /// Creates a model with the default clock and integrator.
    pub fn new(spec: Arc<AircraftSpec>, state: AircraftState) -> Self {
        let mut model = Self {
            spec,
            state,
            clock: StepAccumulator::default(),
            method: IntegrationMethod::default(),
        };
        model.prime();
        model
    }

    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_clock(mut self, clock: StepAccumulator) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the clock and integrator, discarding any pending time.
    pub fn configure(&mut self, clock: StepAccumulator, method: IntegrationMethod) {
        self.clock = clock;
        self.method = method;
    }

    pub fn spec(&self) -> &Arc<AircraftSpec> {
        &self.spec
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn clock(&self) -> &StepAccumulator {
        &self.clock
    }

    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    /// Evaluates the loads at the current state so Verlet starts from `a(t0)`.
    fn prime(&mut self) {
        let inputs = self.inputs();
        let acc = calculate_accelerations(&self.spec, &self.state.spatial, &inputs);
        let spatial = &mut self.state.spatial;
        spatial.acceleration = acc.linear;
        spatial.angular_acceleration = acc.angular;
        let axes = BodyAxes::from_attitude(&spatial.attitude);
        self.state.air_data = calculate_air_data(&spatial.velocity, &axes);
    }

    fn inputs(&self) -> StepInputs {
        StepInputs {
            controls: self.state.controls,
            throttle: self.state.throttle,
        }
    }

    pub fn apply_action(&mut self, action: ControlAction) {
        self.state.apply_action(action);
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.state.set_throttle(throttle);
    }

    /// Advances the simulation by one host frame of `elapsed` seconds.
    pub fn update(&mut self, elapsed: f64) -> StepReport {
        let mut report = StepReport::default();
        if !self.clock.accumulate(elapsed) {
            warn!("Ignoring invalid elapsed time {} for {}", elapsed, self.spec.name);
            return report;
        }

        while report.substeps < self.clock.max_substeps && self.clock.consume_step() {
            self.substep();
            report.substeps += 1;
        }

        if self.clock.has_full_step() {
            report.dropped = self.clock.drain();
            warn!(
                "{}: sub-step cap of {} reached, dropped {:.3}s of simulation time",
                self.spec.name, self.clock.max_substeps, report.dropped
            );
        }
        report
    }

    /// One fixed step: integrate, clamp to the ground, record air data,
    /// then clear the transient controls.
    pub fn substep(&mut self) {
        let dt = self.clock.step_size;
        let spec = &*self.spec;
        let inputs = self.inputs();

        let mut next = self.method.step(&self.state.spatial, dt, |snapshot| {
            calculate_accelerations(spec, snapshot, &inputs)
        });
        apply_ground_contact(&mut next);

        let axes = BodyAxes::from_attitude(&next.attitude);
        self.state.air_data = calculate_air_data(&next.velocity, &axes);
        self.state.spatial = next;

        self.reset_transient_controls();
    }

    /// Clears the control deflections; the throttle is persistent.
    pub fn reset_transient_controls(&mut self) {
        self.state.controls.reset();
    }

    pub fn readout(&self) -> FlightReadout {
        FlightReadout::from_state(&self.spec, &self.state)
    }
}
