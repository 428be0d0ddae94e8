//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionState, Player};

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        MotionState::default(),
        Sprite {
            color: Color::srgb(0.92, 0.88, 0.78),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 60.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // Gravity belongs to the state machine, not the physics engine.
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
