//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::content::data::MovementTuningDef;
use crate::movement::MovementTuning;

const TUNING_PATH: &str = "assets/config/movement.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn load_tuning_file(path: &Path) -> Result<MovementTuningDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Apply the tuning override file if present; otherwise keep the defaults.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    let path = Path::new(TUNING_PATH);
    if !path.exists() {
        info!("No tuning override at {}, using defaults", path.display());
        return;
    }

    match load_tuning_file(path) {
        Ok(def) => {
            *tuning = def.into();
            info!("Loaded movement tuning from {}", path.display());
        }
        Err(e) => {
            warn!("{}; keeping default movement tuning", e);
        }
    }
}
