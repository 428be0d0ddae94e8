//! Movement domain: ground and wall contact detection.
//!
//! These systems are the collision collaborator of the state machine: they
//! write `touching_ground` / `touching_wall` / `wall_direction` and drive
//! the transitions that depend on contact (landing, losing the ground,
//! entering and leaving a wall slide).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::UNGROUNDED_CHECK_DELAY;
use crate::movement::tasks::TaskKind;
use crate::movement::{GameLayer, MotionState, MovementMode, Player};

/// How far past the collider edge the contact rays probe.
const CONTACT_PROBE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MotionState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        // Short ray downward from the feet.
        let origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query
            .cast_ray(origin, Dir2::NEG_Y, CONTACT_PROBE, true, &ground_filter)
            .is_some();

        let was_touching = state.touching_ground;
        state.touching_ground = hit;

        let landed = hit
            && (!was_touching
                || matches!(
                    state.mode(),
                    MovementMode::Falling | MovementMode::WallSlide
                ));
        if landed {
            debug!("ground contact (mode {:?})", state.mode());
            state.grounded();
        } else if !hit && state.mode() == MovementMode::Grounded {
            // Contact gone with no jump in flight: let the deferred check
            // demote to Falling on the next tick.
            state
                .tasks
                .schedule(TaskKind::UngroundedCheck, UNGROUNDED_CHECK_DELAY);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MotionState), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut state) in &mut query {
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + CONTACT_PROBE;

        let left = spatial_query
            .cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter)
            .is_some();
        let right = spatial_query
            .cast_ray(origin, Dir2::X, reach, true, &wall_filter)
            .is_some();

        state.touching_wall = left || right;
        // Direction is sticky: it keeps its last value after contact is
        // lost so a wall jump started off a fresh touch kicks correctly.
        if left {
            state.wall_direction = -1.0;
        } else if right {
            state.wall_direction = 1.0;
        }

        if state.touching_wall && state.mode() == MovementMode::Falling {
            state.change_movement(MovementMode::WallSlide);
        } else if !state.touching_wall && state.mode() == MovementMode::WallSlide {
            state.change_movement(MovementMode::Falling);
        }
    }
}
