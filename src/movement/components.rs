//! Movement domain: movement modes, per-entity motion state, and markers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::MovementTuning;
use crate::movement::tasks::{DeferredTasks, TaskKind};
use crate::movement::transitions::transition_allowed;

/// Seconds the wall-landed flag stays set after entering a wall slide.
pub const WALL_LANDED_DEBOUNCE: f32 = 0.1;

/// Delay for the post-grounding confirmation check. Zero means "next tick".
pub const UNGROUNDED_CHECK_DELAY: f32 = 0.0;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// The six movement modes. Exactly one is active per entity; all changes go
/// through [`MotionState::change_movement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    #[default]
    Grounded,
    Jumping,
    Rising,
    Falling,
    Dashing,
    WallSlide,
}

impl MovementMode {
    /// Jumping, Rising, and Falling count as airborne. Dashing and WallSlide
    /// do not, even though the entity has left the ground.
    pub fn is_in_air(self) -> bool {
        matches!(
            self,
            MovementMode::Jumping | MovementMode::Rising | MovementMode::Falling
        )
    }
}

/// Per-entity movement state: the active mode, the integrated velocity, the
/// per-frame accumulator, and the timers/counters each mode owns.
///
/// X is lateral, Y is vertical. `velocity` only changes when
/// [`commit_velocity`](MotionState::commit_velocity) folds the accumulator
/// in (or when a mode takes it over wholesale, as dashing and the wall-jump
/// setup do).
#[derive(Component, Debug, Default)]
pub struct MotionState {
    mode: MovementMode,
    pub velocity: Vec2,
    pub pending_velocity: Vec2,
    pub jump_timer: f32,
    pub jump_counter: u8,
    pub dash_counter: u8,
    pub dash_timer: f32,
    pub dash_direction: f32,
    pub wall_landed: bool,
    pub(crate) wall_jump_initial: bool,
    /// Set by ground detection; consulted when a deferred ungrounded check fires.
    pub touching_ground: bool,
    /// Set by wall detection before jump/gravity run.
    pub touching_wall: bool,
    /// -1.0 wall on the left, +1.0 wall on the right. Keeps its last value
    /// when contact is lost so a fresh wall jump still kicks the right way.
    pub wall_direction: f32,
    pub facing: Facing,
    pub tasks: DeferredTasks,
}

impl MotionState {
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn is_in_air(&self) -> bool {
        self.mode.is_in_air()
    }

    /// Accumulate `direction * scale * dt` into the pending velocity.
    /// `scale` is an acceleration; negative values decelerate.
    pub fn add_velocity(&mut self, direction: Vec2, scale: f32, dt: f32) {
        self.pending_velocity += direction * scale * dt;
    }

    /// The mode gate. Returns `true` iff an actual change occurred; rejected
    /// and same-mode requests return `false` without side effects.
    pub fn change_movement(&mut self, requested: MovementMode) -> bool {
        if !transition_allowed(self.mode, requested) {
            return false;
        }

        let previous = self.mode;
        self.mode = requested;
        if previous == requested {
            return false;
        }

        if previous == MovementMode::WallSlide {
            self.wall_landed = false;
        }
        if requested == MovementMode::WallSlide {
            self.wall_landed = true;
            self.tasks
                .schedule(TaskKind::WallLandedReset, WALL_LANDED_DEBOUNCE);
        }

        debug!("movement mode {:?} -> {:?}", previous, requested);
        true
    }

    /// Per-mode gravity, from this frame's mode snapshot. Jumping and
    /// Dashing supply their own motion and get none. While wall sliding the
    /// pull is lateral, into the wall, instead of downward.
    pub fn apply_gravity(&mut self, mode: MovementMode, tuning: &MovementTuning, dt: f32) {
        let scale = match mode {
            MovementMode::Grounded | MovementMode::Falling | MovementMode::WallSlide => {
                tuning.gravity_accel
            }
            MovementMode::Rising => tuning.rising_gravity_accel,
            MovementMode::Jumping | MovementMode::Dashing => return,
        };

        let direction = if mode == MovementMode::WallSlide {
            Vec2::new(self.wall_direction, 0.0)
        } else {
            Vec2::NEG_Y
        };

        self.add_velocity(direction, scale, dt);
    }

    /// Ground contact established: force Grounded, hand back the jump/dash
    /// charges, and queue the next-tick confirmation check.
    pub fn grounded(&mut self) {
        self.change_movement(MovementMode::Grounded);
        self.refresh_movements();
        self.tasks
            .schedule(TaskKind::UngroundedCheck, UNGROUNDED_CHECK_DELAY);
    }

    /// Deferred confirmation: anything not already airborne starts falling.
    pub fn ungrounded(&mut self) {
        if !self.is_in_air() {
            self.change_movement(MovementMode::Falling);
        }
    }

    pub fn refresh_movements(&mut self) {
        self.dash_counter = 0;
        self.jump_counter = 0;
    }

    /// Try to start a jump: from the ground, off a touched wall (when wall
    /// jumps are enabled), or as an air jump while charges remain.
    pub fn start_jump(&mut self, tuning: &MovementTuning) {
        let mut can_jump = false;

        if self.mode == MovementMode::Grounded {
            can_jump = true;
        } else if self.touching_wall && tuning.wall_slide_jump {
            // Wall jump: discard built-up speed, the kick replaces it.
            can_jump = true;
            self.wall_jump_initial = true;
            self.velocity = Vec2::ZERO;
        } else if self.is_in_air() && self.jump_counter < tuning.max_jumps {
            self.jump_counter += 1;
            can_jump = true;
        }

        if can_jump {
            self.jump_timer = 0.0;
            self.change_movement(MovementMode::Jumping);
        }
    }

    /// Per-frame jump impulse, from this frame's mode snapshot. The impulse
    /// points straight up, or up-and-away from the wall while the initial
    /// wall-jump kick lasts. The kick is dropped halfway through the jump;
    /// the jump itself ends once the timer runs out.
    pub fn jumping(&mut self, mode: MovementMode, tuning: &MovementTuning, dt: f32) {
        if mode != MovementMode::Jumping {
            return;
        }

        let direction = if self.wall_jump_initial {
            Vec2::new(-2.0 * self.wall_direction, 1.0)
        } else {
            Vec2::Y
        };
        self.add_velocity(direction, tuning.jump_accel, dt);

        self.jump_timer += dt;
        if self.jump_timer >= tuning.max_jump_duration {
            self.stop_jump(false, dt);
        }
        if self.jump_timer >= tuning.max_jump_duration / 2.0 {
            self.wall_jump_initial = false;
        }
    }

    /// End an active jump and hand off to Rising. A sharp stop (early button
    /// release) also brakes away two thirds of the current vertical speed.
    pub fn stop_jump(&mut self, sharp: bool, dt: f32) {
        if self.mode != MovementMode::Jumping {
            return;
        }

        self.wall_jump_initial = false;
        self.change_movement(MovementMode::Rising);

        if sharp && dt > f32::EPSILON {
            self.add_velocity(Vec2::NEG_Y, (self.velocity.y / dt).abs() / 1.5, dt);
        }
    }

    /// Try to start a dash. Dashes are charge-limited like air jumps;
    /// charges come back on grounding.
    pub fn start_dash(&mut self, axis_x: f32, tuning: &MovementTuning) {
        if self.mode == MovementMode::Dashing || self.dash_counter >= tuning.max_dashes {
            return;
        }

        self.dash_counter += 1;
        self.dash_direction = if axis_x.abs() > 0.1 {
            axis_x.signum()
        } else {
            self.facing.sign()
        };
        self.dash_timer = tuning.dash_duration;
        self.change_movement(MovementMode::Dashing);
    }

    /// Per-frame dash motion, from this frame's mode snapshot. A dash owns
    /// the velocity outright: fixed lateral speed, vertical locked to zero.
    /// On expiry the entity drops into Falling.
    pub fn dashing(&mut self, mode: MovementMode, tuning: &MovementTuning, dt: f32) {
        if mode != MovementMode::Dashing {
            return;
        }

        self.velocity = Vec2::new(self.dash_direction * tuning.dash_speed, 0.0);

        self.dash_timer -= dt;
        if self.dash_timer <= 0.0 {
            self.change_movement(MovementMode::Falling);
        }
    }

    /// Fired by the wall-landed debounce task. Clearing the already-removed
    /// task entry is a no-op.
    pub fn reset_wall_landed(&mut self) {
        self.wall_landed = false;
        self.tasks.cancel(TaskKind::WallLandedReset);
    }

    /// Tick the deferred-task table and dispatch whatever came due. The
    /// ungrounded check only demotes to Falling when ground contact has
    /// actually ceased; a landing that stuck leaves the check a no-op.
    pub fn run_due_tasks(&mut self, dt: f32) {
        for task in self.tasks.tick(dt) {
            match task {
                TaskKind::UngroundedCheck => {
                    if !self.touching_ground {
                        self.ungrounded();
                    }
                }
                TaskKind::WallLandedReset => self.reset_wall_landed(),
            }
        }
    }

    /// Fold the frame's accumulator into the integrated velocity and return
    /// what the physics resolver should apply. Wall sliding caps the
    /// downward speed.
    pub fn commit_velocity(&mut self, tuning: &MovementTuning) -> Vec2 {
        self.velocity += self.pending_velocity;
        self.pending_velocity = Vec2::ZERO;

        if self.mode == MovementMode::WallSlide {
            self.velocity.y = self.velocity.y.max(-tuning.wall_slide_speed);
        }

        self.velocity
    }
}
