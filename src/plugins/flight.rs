use bevy::prelude::*;

use crate::components::{ControlAction, FlightReadout};
use crate::resources::{PhysicsConfig, TransformationResource};
use crate::systems::{control_input_system, flight_setup_system, flight_step_system, FlightModel};

/// Flight simulation stages, run in order every frame
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Setup,
    Input,
    Step,
}

/// A control action addressed to one aircraft
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ControlEvent {
    pub entity: Entity,
    pub action: ControlAction,
}

impl ControlEvent {
    pub fn new(entity: Entity, action: ControlAction) -> Self {
        Self { entity, action }
    }
}

pub struct FlightPlugin {
    pub config: PhysicsConfig,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl FlightPlugin {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("Invalid physics config: {}. Using defaults", e);
                PhysicsConfig::default()
            }
        };

        app.insert_resource(config)
            .init_resource::<TransformationResource>()
            .add_event::<ControlEvent>();

        app.configure_sets(
            Update,
            (FlightSet::Setup, FlightSet::Input, FlightSet::Step).chain(),
        );

        app.add_systems(
            Update,
            (
                flight_setup_system.in_set(FlightSet::Setup),
                control_input_system.in_set(FlightSet::Input),
                flight_step_system.in_set(FlightSet::Step),
            ),
        );
    }
}

/// Spawns an aircraft entity with its scene transform and HUD readout.
pub fn spawn_aircraft(commands: &mut Commands, model: FlightModel, name: &str) -> Entity {
    let transform = TransformationResource::default().to_transform(&model.state().spatial);
    let readout: FlightReadout = model.readout();
    info!("Spawning aircraft '{}' of type {}", name, model.spec().name);
    commands
        .spawn((Name::new(name.to_string()), transform, readout, model))
        .id()
}
