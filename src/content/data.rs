//! Data definition for the RON tuning file.
//!
//! Mirrors the structure of assets/config/movement.ron. Every field is
//! optional in the file; omitted fields keep their built-in defaults.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuningDef {
    pub gravity_accel: f32,
    pub rising_gravity_accel: f32,
    pub jump_accel: f32,
    pub max_jump_duration: f32,
    pub max_jumps: u8,
    pub wall_slide_jump: bool,
    pub drive_accel: f32,
    pub drive_decel: f32,
    pub max_drive_speed: f32,
    pub wall_slide_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub max_dashes: u8,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        MovementTuning::default().into()
    }
}

impl From<MovementTuning> for MovementTuningDef {
    fn from(tuning: MovementTuning) -> Self {
        Self {
            gravity_accel: tuning.gravity_accel,
            rising_gravity_accel: tuning.rising_gravity_accel,
            jump_accel: tuning.jump_accel,
            max_jump_duration: tuning.max_jump_duration,
            max_jumps: tuning.max_jumps,
            wall_slide_jump: tuning.wall_slide_jump,
            drive_accel: tuning.drive_accel,
            drive_decel: tuning.drive_decel,
            max_drive_speed: tuning.max_drive_speed,
            wall_slide_speed: tuning.wall_slide_speed,
            dash_speed: tuning.dash_speed,
            dash_duration: tuning.dash_duration,
            max_dashes: tuning.max_dashes,
        }
    }
}

impl From<MovementTuningDef> for MovementTuning {
    fn from(def: MovementTuningDef) -> Self {
        Self {
            gravity_accel: def.gravity_accel,
            rising_gravity_accel: def.rising_gravity_accel,
            jump_accel: def.jump_accel,
            max_jump_duration: def.max_jump_duration,
            max_jumps: def.max_jumps,
            wall_slide_jump: def.wall_slide_jump,
            drive_accel: def.drive_accel,
            drive_decel: def.drive_decel,
            max_drive_speed: def.max_drive_speed,
            wall_slide_speed: def.wall_slide_speed,
            dash_speed: def.dash_speed,
            dash_duration: def.dash_duration,
            max_dashes: def.max_dashes,
        }
    }
}
