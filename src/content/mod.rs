//! Content domain: tuning file loading and application.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CameraDef, MovementDef, PlayerDef, SimulationDef, TuningFile};
pub use loader::{ContentLoadError, load_tuning_file, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::movement::{MovementTuning, PlayerSpawn};

/// Location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TuningFile>()
            .register_type::<MovementDef>()
            .register_type::<CameraDef>()
            .register_type::<PlayerDef>()
            .register_type::<SimulationDef>()
            .add_systems(PreStartup, load_tuning);
    }
}

/// Pick the tuning to run with. Load and validation failures are logged and
/// replaced by the built-in defaults.
pub fn resolve_tuning(loaded: Result<TuningFile, ContentLoadError>) -> TuningFile {
    let tuning = match loaded {
        Ok(tuning) => tuning,
        Err(e) => {
            error!("{}", e);
            warn!("Using built-in tuning defaults");
            return TuningFile::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        return tuning;
    }

    for e in &errors {
        error!("Invalid tuning: {}", e);
    }
    warn!(
        "Tuning rejected with {} error(s), using built-in defaults",
        errors.len()
    );
    TuningFile::default()
}

fn load_tuning(mut commands: Commands) {
    let tuning = resolve_tuning(load_tuning_file(Path::new(TUNING_PATH)));

    info!(
        "Tuning loaded: grounded {:.1}, sliding {:.1} (accel {:.1}), fixed {} Hz",
        tuning.movement.max_grounded_speed,
        tuning.movement.max_sliding_speed,
        tuning.movement.sliding_acceleration,
        tuning.simulation.fixed_hz
    );

    commands.insert_resource(MovementTuning::from(&tuning.movement));
    commands.insert_resource(CameraTuning::from(&tuning.camera));
    commands.insert_resource(PlayerSpawn::from(&tuning.player));
    commands.insert_resource(Time::<Fixed>::from_hz(tuning.simulation.fixed_hz));
}
