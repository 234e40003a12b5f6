use bevy::prelude::*;

use crate::plugins::ControlEvent;
use crate::systems::physics::FlightModel;

/// Applies this frame's control events to their aircraft.
///
/// Surface deflections last until the end of the next sub-step; throttle
/// changes persist.
pub fn control_input_system(
    mut events: EventReader<ControlEvent>,
    mut models: Query<&mut FlightModel>,
) {
    for event in events.read() {
        match models.get_mut(event.entity) {
            Ok(mut model) => model.apply_action(event.action),
            Err(_) => warn!(
                "Dropping control {} for entity {:?} without a flight model",
                event.action, event.entity
            ),
        }
    }
}
