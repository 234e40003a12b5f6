use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nalgebra::{UnitQuaternion, Vector3};
use std::{env, path::PathBuf, sync::Arc, time::Duration};

use flyer::{
    components::{AircraftSource, AircraftState, FlightReadout},
    plugins::{spawn_aircraft, FlightPlugin, FlightSet, TransformationPlugin},
    resources::PhysicsConfig,
    systems::FlightModel,
    utils::{rad_to_deg, SimError},
};

const FRAME_RATE: f64 = 60.0;
const DEFAULT_DURATION: f64 = 30.0;
const START_ALTITUDE: f64 = 500.0;
const START_SPEED: f64 = 40.0;
const START_THROTTLE: f64 = 0.25;

/// Usage: flyer_headless [duration_s] [catalog.yaml aircraft_name] [physics.yaml]
fn main() -> Result<(), SimError> {
    let args: Vec<String> = env::args().collect();

    let duration = match args.get(1) {
        Some(value) => value
            .parse::<f64>()
            .map_err(|e| SimError::InvalidConfig(format!("invalid duration '{}': {}", value, e)))?,
        None => DEFAULT_DURATION,
    };

    let source = match (args.get(2), args.get(3)) {
        (Some(path), Some(name)) => AircraftSource::Catalog {
            path: PathBuf::from(path),
            name: name.clone(),
        },
        _ => AircraftSource::Generic,
    };
    let spec = source.load()?;

    let physics = match args.get(4) {
        Some(path) => PhysicsConfig::load(path)?,
        None => PhysicsConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins((TransformationPlugin::default(), FlightPlugin::new(physics)))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FRAME_RATE,
        )))
        .add_systems(Startup, move |mut commands: Commands| {
            let mut state = AircraftState::flying(
                Vector3::new(0.0, 0.0, START_ALTITUDE),
                UnitQuaternion::identity(),
                START_SPEED,
            );
            state.set_throttle(START_THROTTLE);
            let model = FlightModel::new(Arc::clone(&spec), state);
            spawn_aircraft(&mut commands, model, "player");
        })
        .add_systems(Update, log_readout_system.after(FlightSet::Step));

    app.finish();
    app.cleanup();

    let frames = (duration.max(0.0) * FRAME_RATE).ceil() as u64;
    info!("Simulating {:.1}s over {} frames", duration, frames);
    for _ in 0..frames {
        app.update();
    }
    Ok(())
}

/// Logs every aircraft's readout once per simulated second.
fn log_readout_system(
    time: Res<Time>,
    mut next_log: Local<f64>,
    query: Query<(&Name, &FlightReadout)>,
) {
    if time.elapsed_secs_f64() < *next_log {
        return;
    }
    *next_log += 1.0;

    for (name, readout) in query.iter() {
        info!(
            "{} t={:.1}s alt={:.1}m speed={:.1}m/s hdg={:.0}° pitch={:.1}° roll={:.1}° aoa={:.1}° g={:.2}{}",
            name,
            time.elapsed_secs_f64(),
            readout.altitude,
            readout.speed,
            rad_to_deg(readout.heading),
            rad_to_deg(readout.pitch),
            rad_to_deg(readout.roll),
            rad_to_deg(readout.angle_of_attack),
            readout.g_force.normal,
            if readout.overspeed { " OVERSPEED" } else { "" }
        );
    }
}
