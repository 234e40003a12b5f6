use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flyer::{
    components::{ControlAction, FlightReadout},
    plugins::{spawn_aircraft, ControlEvent, FlightPlugin, TransformationPlugin},
    resources::PhysicsConfig,
    systems::FlightModel,
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    physics_config: PhysicsConfig,
    meters_per_unit: f64,
    frame_time: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            physics_config: PhysicsConfig::default(),
            meters_per_unit: 1.0,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = config;
        self
    }

    pub fn with_scale(mut self, meters_per_unit: f64) -> Self {
        self.meters_per_unit = meters_per_unit;
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn build(self) -> TestApp {
        let frame = Duration::from_secs_f64(self.frame_time);
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(TransformationPlugin::new(self.meters_per_unit))
            .add_plugins(FlightPlugin::new(self.physics_config))
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame));

        app.finish();
        app.cleanup();
        // The first update only starts the clock
        app.update();

        TestApp { app, frame }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub frame: Duration,
}

impl TestApp {
    /// Host frame time as the flight systems see it
    pub fn frame_seconds(&self) -> f64 {
        self.frame.as_secs_f64()
    }

    pub fn spawn(&mut self, model: FlightModel, name: &str) -> Entity {
        let world = self.app.world_mut();
        let entity = {
            let mut commands = world.commands();
            spawn_aircraft(&mut commands, model, name)
        };
        world.flush();
        entity
    }

    pub fn send(&mut self, entity: Entity, action: ControlAction) {
        self.app
            .world_mut()
            .send_event(ControlEvent::new(entity, action));
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn model(&self, entity: Entity) -> &FlightModel {
        self.app
            .world()
            .get::<FlightModel>(entity)
            .expect("entity has no flight model")
    }

    pub fn transform(&self, entity: Entity) -> Transform {
        *self
            .app
            .world()
            .get::<Transform>(entity)
            .expect("entity has no transform")
    }

    pub fn readout(&self, entity: Entity) -> FlightReadout {
        self.app
            .world()
            .get::<FlightReadout>(entity)
            .expect("entity has no readout")
            .clone()
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }
}
