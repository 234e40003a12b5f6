use crate::common::*;
use bevy::prelude::*;
use flyer::{
    components::ControlAction,
    resources::{PhysicsConfig, PositionTransform, TransformationResource},
    systems::IntegrationMethod,
    utils::BodyAxes,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

fn render(v: &Vector3<f64>, meters_per_unit: f64) -> Vec3 {
    Vec3::new(
        (v.x / meters_per_unit) as f32,
        (v.z / meters_per_unit) as f32,
        (-v.y / meters_per_unit) as f32,
    )
}

#[test]
fn test_pose_written_in_render_frame() {
    let mut app = TestAppBuilder::new().with_scale(2.0).build();
    let mut model = generic_model(level_state(500.0, 40.0), IntegrationMethod::default());
    model.set_throttle(0.3);
    let entity = app.spawn(model, "alpha");

    for _ in 0..30 {
        app.send(entity, ControlAction::RollRight);
        app.run_frame();
    }

    let spatial = app.model(entity).state().spatial.clone();
    let transform = app.transform(entity);
    assert_vec3_eq(transform.translation, render(&spatial.position, 2.0), 1e-3);

    let axes = BodyAxes::from_attitude(&spatial.attitude);
    assert_vec3_eq(*transform.forward(), render(&axes.forward, 1.0), 1e-5);
    assert_vec3_eq(*transform.up(), render(&axes.up, 1.0), 1e-5);

    let resource = app.get_resource::<TransformationResource>().unwrap();
    assert_eq!(resource.to_render_coords(&spatial.position), transform.translation);
}

#[test]
fn test_control_events_reach_the_model() {
    let mut app = TestAppBuilder::new().build();
    let entity = app.spawn(
        generic_model(level_state(500.0, 40.0), IntegrationMethod::default()),
        "alpha",
    );

    for _ in 0..5 {
        app.send(entity, ControlAction::ThrustAdd);
    }
    for _ in 0..10 {
        app.send(entity, ControlAction::PitchUp);
        app.run_frame();
    }

    let model = app.model(entity);
    assert!((model.state().throttle - 0.05).abs() < 1e-12);
    assert!(model.state().spatial.angular_velocity.x > 0.0);
    assert!(app.readout(entity).pitch > 0.0);
}

#[test]
fn test_events_for_missing_entities_are_ignored() {
    let mut app = TestAppBuilder::new().build();
    let entity = app.spawn(
        glider_model(resting_state(100.0), IntegrationMethod::default()),
        "alpha",
    );
    app.app.world_mut().despawn(entity);

    app.send(entity, ControlAction::PitchUp);
    app.run_frames(3);
}

#[test]
fn test_short_frames_defer_the_write() {
    let mut app = TestAppBuilder::new().with_frame_time(0.005).build();
    let entity = app.spawn(
        glider_model(resting_state(100.0), IntegrationMethod::default()),
        "alpha",
    );

    app.run_frame();
    let first = app.transform(entity);
    let first_readout = app.readout(entity);
    assert_eq!(first_readout.altitude, 100.0);

    app.run_frames(2);
    assert_eq!(app.transform(entity), first);
    assert_eq!(app.readout(entity), first_readout);

    // Fourth frame completes the first sub-step
    app.run_frame();
    assert!(app.transform(entity).translation.y < first.translation.y);
    assert!(app.readout(entity).altitude < 100.0);
}

#[test]
fn test_physics_config_applied_on_spawn() {
    let config = PhysicsConfig {
        step_size: 0.01,
        max_substeps: 5,
        integrator: IntegrationMethod::Euler,
    };
    let mut app = TestAppBuilder::new()
        .with_physics(config.clone())
        .with_frame_time(0.1)
        .build();
    assert_eq!(app.get_resource::<PhysicsConfig>(), Some(&config));

    let entity = app.spawn(
        glider_model(resting_state(1000.0), IntegrationMethod::default()),
        "alpha",
    );
    app.run_frame();

    let model = app.model(entity);
    assert_eq!(model.method(), IntegrationMethod::Euler);
    assert_eq!(model.clock().step_size, 0.01);
    assert_eq!(model.clock().max_substeps, 5);
    // Ten sub-steps were due, five ran and the rest was dropped
    assert_eq!(model.clock().pending(), 0.0);
}

#[test]
fn test_invalid_physics_config_falls_back() {
    let config = PhysicsConfig {
        step_size: -1.0,
        ..PhysicsConfig::default()
    };
    let app = TestAppBuilder::new().with_physics(config).build();
    assert_eq!(
        app.get_resource::<PhysicsConfig>(),
        Some(&PhysicsConfig::default())
    );
}

#[test]
fn test_ecs_matches_direct_stepping() {
    let mut app = TestAppBuilder::new().build();
    let elapsed = app.frame_seconds();

    let mut direct = generic_model(level_state(500.0, 40.0), IntegrationMethod::default());
    direct.set_throttle(0.4);
    let entity = app.spawn(direct.clone(), "alpha");

    for _ in 0..120 {
        app.run_frame();
        direct.update(elapsed);
    }

    assert_eq!(app.model(entity).state(), direct.state());
    assert_eq!(app.readout(entity), direct.readout());
}

#[test]
fn test_fleet_steps_independently() {
    let mut app = TestAppBuilder::new().build();
    let climber = app.spawn(
        generic_model(level_state(500.0, 40.0), IntegrationMethod::default()),
        "climber",
    );
    let faller = app.spawn(
        glider_model(resting_state(500.0), IntegrationMethod::default()),
        "faller",
    );

    for _ in 0..60 {
        app.send(climber, ControlAction::PitchUp);
        app.run_frame();
    }

    assert!(app.model(climber).state().spatial.angular_velocity.x > 0.0);
    assert_eq!(
        app.model(faller).state().spatial.angular_velocity,
        Vector3::zeros()
    );
    assert!(app.readout(faller).altitude < 500.0);
}
