//! Movement domain: plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;
mod tasks;
mod transitions;

#[cfg(feature = "dev-tools")]
mod dev;

#[cfg(test)]
mod tests;

pub use components::{
    Facing, GameLayer, Ground, MotionState, MovementMode, Player, UNGROUNDED_CHECK_DELAY,
    WALL_LANDED_DEBOUNCE, Wall,
};
pub use events::ModeChanged;
pub use resources::{MovementInput, MovementTuning};
pub use tasks::{DeferredTasks, TaskKind};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    announce_mode_changes, apply_drive, commit_velocity, detect_ground, detect_walls,
    handle_actions, integrate_motion, read_input, sync_resolved_velocity,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<ModeChanged>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    sync_resolved_velocity,
                    detect_ground,
                    detect_walls,
                    handle_actions,
                    apply_drive,
                    integrate_motion,
                    commit_velocity,
                    announce_mode_changes,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_motion_gizmos.after(commit_velocity));
    }
}
