use bevy::prelude::*;

use crate::components::FlightReadout;
use crate::resources::{AttitudeTransform, PhysicsConfig, PositionTransform, TransformationResource};
use crate::systems::physics::FlightModel;

/// Applies the physics settings to aircraft entering the simulation and
/// places them in the scene.
pub fn flight_setup_system(
    config: Res<PhysicsConfig>,
    transforms: Res<TransformationResource>,
    mut query: Query<(&mut FlightModel, &mut Transform, &mut FlightReadout), Added<FlightModel>>,
) {
    for (mut model, mut transform, mut readout) in query.iter_mut() {
        model.configure(config.clock(), config.integrator);
        write_pose(&transforms, &model, &mut transform);
        *readout = model.readout();
        info!(
            "Aircraft {} entered simulation using {:?}",
            model.spec().name, config.integrator
        );
    }
}

/// Steps every aircraft by the frame delta and publishes the new pose.
///
/// The frame delta is read once here and passed down explicitly; the pose
/// and readout are written once per frame, only when a sub-step ran.
pub fn flight_step_system(
    time: Res<Time>,
    transforms: Res<TransformationResource>,
    mut query: Query<(&mut FlightModel, &mut Transform, &mut FlightReadout)>,
) {
    let elapsed = time.delta_secs_f64();

    query
        .par_iter_mut()
        .for_each(|(mut model, mut transform, mut readout)| {
            let report = model.update(elapsed);
            if report.substeps > 0 {
                write_pose(&transforms, &model, &mut transform);
                *readout = model.readout();
            }
        });
}

fn write_pose(transforms: &TransformationResource, model: &FlightModel, transform: &mut Transform) {
    let spatial = &model.state().spatial;
    transform.translation = transforms.to_render_coords(&spatial.position);
    transform.rotation = transforms.to_render_rotation(&spatial.attitude);
}
