//! Movement domain: per-frame action handling, integration, and the
//! velocity handoff to the physics resolver.

use std::collections::HashMap;

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    Facing, ModeChanged, MotionState, MovementInput, MovementMode, MovementTuning, Player,
};

/// Pull the resolver's verdict from last frame back into the state machine.
/// Collision response lives in the physics engine; whatever velocity
/// survived it is the base this frame integrates on.
pub(crate) fn sync_resolved_velocity(
    mut query: Query<(&LinearVelocity, &mut MotionState), With<Player>>,
) {
    for (velocity, mut state) in &mut query {
        state.velocity = velocity.0;
    }
}

pub(crate) fn handle_actions(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MotionState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if input.jump_just_pressed {
            state.start_jump(&tuning);
        }

        // Releasing the button mid-jump cuts it short.
        if !input.jump_held && state.mode() == MovementMode::Jumping {
            state.stop_jump(true, dt);
        }

        if input.dash_just_pressed {
            state.start_dash(input.axis.x, &tuning);
        }
    }
}

/// Horizontal locomotion through the accumulator: accelerate toward the
/// input target, brake toward zero without it. Both scales are clamped so a
/// single frame never overshoots, keeping the result frame-rate independent.
pub(crate) fn apply_drive(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MotionState, With<Player>>,
) {
    let dt = time.delta_secs();
    if dt <= f32::EPSILON {
        return;
    }

    for mut state in &mut query {
        // A dash, a wall slide, or the initial wall-jump kick owns lateral motion.
        let mode = state.mode();
        if mode == MovementMode::Dashing
            || mode == MovementMode::WallSlide
            || state.wall_jump_initial
        {
            continue;
        }

        if input.axis.x > 0.1 {
            state.facing = Facing::Right;
        } else if input.axis.x < -0.1 {
            state.facing = Facing::Left;
        }

        let vx = state.velocity.x;
        if input.axis.x.abs() > 0.1 {
            let target = input.axis.x * tuning.max_drive_speed;
            let gap = target - vx;
            if gap.abs() > f32::EPSILON {
                let scale = tuning.drive_accel.min(gap.abs() / dt);
                state.add_velocity(Vec2::new(gap.signum(), 0.0), scale, dt);
            }
        } else if vx.abs() > f32::EPSILON {
            let scale = tuning.drive_decel.min(vx.abs() / dt);
            state.add_velocity(Vec2::new(-vx.signum(), 0.0), scale, dt);
        }
    }
}

/// The frame's integration pass. Due deferred tasks fire first; then one
/// mode snapshot drives gravity, jump, and dash, so a transition those
/// force mid-frame cannot retroactively change what this frame applies.
pub(crate) fn integrate_motion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MotionState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.run_due_tasks(dt);

        let mode = state.mode();
        state.apply_gravity(mode, &tuning, dt);
        state.jumping(mode, &tuning, dt);
        state.dashing(mode, &tuning, dt);
    }
}

/// Commit the accumulator and hand the result to the resolver. Also the
/// apex handoff: once Rising has bled its upward speed, the entity falls.
pub(crate) fn commit_velocity(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        let resolved = state.commit_velocity(&tuning);

        if state.mode() == MovementMode::Rising && resolved.y <= 0.0 {
            state.change_movement(MovementMode::Falling);
        }

        velocity.0 = resolved;
    }
}

/// Report mode changes to downstream consumers, one message per entity per
/// frame (intermediate same-frame hops collapse into the endpoints).
pub(crate) fn announce_mode_changes(
    mut previous: Local<HashMap<Entity, MovementMode>>,
    mut writer: MessageWriter<ModeChanged>,
    query: Query<(Entity, &MotionState), With<Player>>,
) {
    for (entity, state) in &query {
        let mode = state.mode();
        if let Some(from) = previous.insert(entity, mode)
            && from != mode
        {
            writer.write(ModeChanged {
                entity,
                from,
                to: mode,
            });
        }
    }
}
