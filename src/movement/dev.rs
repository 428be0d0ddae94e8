//! Movement domain: dev-tools gizmo overlay.

use bevy::prelude::*;

use crate::movement::{MotionState, MovementMode, Player};

/// Draw the committed velocity and any wall contact, color-coded by mode.
pub(crate) fn draw_motion_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MotionState), With<Player>>,
) {
    for (transform, state) in &query {
        let origin = transform.translation.truncate();

        let color = match state.mode() {
            MovementMode::Grounded => Color::srgb(0.4, 0.8, 0.4),
            MovementMode::Jumping => Color::srgb(0.9, 0.9, 0.3),
            MovementMode::Rising => Color::srgb(0.9, 0.7, 0.3),
            MovementMode::Falling => Color::srgb(0.4, 0.6, 0.9),
            MovementMode::Dashing => Color::srgb(0.9, 0.3, 0.3),
            MovementMode::WallSlide => Color::srgb(0.8, 0.4, 0.9),
        };

        gizmos.line_2d(origin, origin + state.velocity * 0.1, color);

        if state.touching_wall {
            gizmos.line_2d(
                origin,
                origin + Vec2::new(state.wall_direction * 24.0, 0.0),
                Color::srgb(0.9, 0.9, 0.9),
            );
        }
    }
}
