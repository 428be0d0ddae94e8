//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, detect_walls};
pub(crate) use input::read_input;
pub(crate) use movement::{
    announce_mode_changes, apply_drive, commit_velocity, handle_actions, integrate_motion,
    sync_resolved_velocity,
};
