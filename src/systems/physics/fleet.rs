use rayon::prelude::*;

use crate::systems::physics::{FlightModel, StepReport};

/// Steps independent aircraft in parallel by the same host frame time.
pub fn update_fleet(models: &mut [FlightModel], elapsed: f64) -> Vec<StepReport> {
    models
        .par_iter_mut()
        .map(|model| model.update(elapsed))
        .collect()
}
