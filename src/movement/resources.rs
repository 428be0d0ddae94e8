//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Downward pull for Grounded, Falling, and (laterally) WallSlide.
    pub gravity_accel: f32,
    /// Weaker pull while decelerating through Rising.
    pub rising_gravity_accel: f32,
    /// Upward acceleration while the jump impulse is active.
    pub jump_accel: f32,
    /// How long the jump impulse may run before it is cut.
    pub max_jump_duration: f32,
    /// Air jump charges (0 = no double jump, 1 = double jump, etc.)
    pub max_jumps: u8,
    /// Whether touching a wall grants a jump.
    pub wall_slide_jump: bool,
    pub drive_accel: f32,
    pub drive_decel: f32,
    pub max_drive_speed: f32,
    /// Cap on downward speed while wall sliding.
    pub wall_slide_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Dash charges between groundings.
    pub max_dashes: u8,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity_accel: 1800.0,
            rising_gravity_accel: 1100.0,
            jump_accel: 2400.0,
            max_jump_duration: 0.28,
            max_jumps: 1,
            wall_slide_jump: true,
            drive_accel: 3000.0,
            drive_decel: 2600.0,
            max_drive_speed: 320.0,
            wall_slide_speed: 100.0,
            dash_speed: 900.0,
            dash_duration: 0.16,
            max_dashes: 1,
        }
    }
}

impl MovementTuning {
    /// Vertical speed at the moment a full-duration jump hands off to Rising.
    pub fn full_jump_speed(&self) -> f32 {
        self.jump_accel * self.max_jump_duration
    }

    /// Apex height of an uncut jump: the powered ascent plus the coast
    /// against rising gravity (h = v² / 2g).
    pub fn full_jump_height(&self) -> f32 {
        let v = self.full_jump_speed();
        let powered = 0.5 * self.jump_accel * self.max_jump_duration * self.max_jump_duration;
        powered + v * v / (2.0 * self.rising_gravity_accel)
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
