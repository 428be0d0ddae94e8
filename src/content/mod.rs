//! Content domain: tuning config plugin wiring and public exports.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::MovementTuningDef;
pub use loader::ContentLoadError;

use bevy::prelude::*;

use crate::content::loader::load_movement_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_tuning);
    }
}
