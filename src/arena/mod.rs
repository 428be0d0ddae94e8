//! Arena domain: sandbox geometry for the movement state machine.
//!
//! A floor, two bounding walls, a few platforms, and a free-standing pillar
//! for wall jumps. Static avian bodies on the Ground/Wall layers; the
//! movement systems only ever see them through raycasts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementTuning, Wall};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn spawn_block(
    commands: &mut Commands,
    size: Vec2,
    position: Vec2,
    color: Color,
    layers: CollisionLayers,
    is_wall: bool,
) {
    let mut entity = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
    if is_wall {
        entity.insert(Wall);
    } else {
        entity.insert(Ground);
    }
}

pub(crate) fn spawn_arena(mut commands: Commands, tuning: Res<MovementTuning>) {
    let ground_color = Color::srgb(0.36, 0.45, 0.38);
    let wall_color = Color::srgb(0.32, 0.32, 0.42);
    let platform_color = Color::srgb(0.48, 0.40, 0.30);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let floor_top = -200.0;
    // Half of an uncut jump between platforms keeps every hop comfortable.
    let step = tuning.full_jump_height() * 0.5;

    // Floor
    spawn_block(
        &mut commands,
        Vec2::new(900.0, 40.0),
        Vec2::new(0.0, floor_top - 20.0),
        ground_color,
        ground_layers,
        false,
    );

    // Bounding walls, tall enough to slide down from any jump
    for side in [-1.0, 1.0] {
        spawn_block(
            &mut commands,
            Vec2::new(40.0, 560.0),
            Vec2::new(side * 470.0, 60.0),
            wall_color,
            wall_layers,
            true,
        );
    }

    // Stepping platforms, one jump apart
    spawn_block(
        &mut commands,
        Vec2::new(160.0, 20.0),
        Vec2::new(-260.0, floor_top + step),
        platform_color,
        ground_layers,
        false,
    );
    spawn_block(
        &mut commands,
        Vec2::new(160.0, 20.0),
        Vec2::new(260.0, floor_top + 2.0 * step),
        platform_color,
        ground_layers,
        false,
    );
    spawn_block(
        &mut commands,
        Vec2::new(130.0, 20.0),
        Vec2::new(0.0, floor_top + 3.0 * step),
        platform_color,
        ground_layers,
        false,
    );

    // Pillar for wall-jump practice
    spawn_block(
        &mut commands,
        Vec2::new(30.0, 220.0),
        Vec2::new(-110.0, -90.0),
        wall_color,
        wall_layers,
        true,
    );

    info!("Arena spawned");
}
