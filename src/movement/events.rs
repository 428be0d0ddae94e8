//! Movement domain: messages for downstream consumers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MovementMode;

/// Broadcast once per frame for each entity whose movement mode changed,
/// so animation/audio layers can react without polling the component.
#[derive(Debug, Clone, Copy)]
pub struct ModeChanged {
    pub entity: Entity,
    pub from: MovementMode,
    pub to: MovementMode,
}

impl Message for ModeChanged {}
