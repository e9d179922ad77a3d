//! The player token walking between places on the map.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::resources::gamesession::Character;

/// Seconds the token takes to walk between two places.
pub const DEFAULT_MOVE_DURATION: f32 = 1.0;

/// Tile of the character sheet used while standing on the map.
pub const TOKEN_TILE: usize = 1;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapToken {
    pub character: Character,
}

impl MapToken {
    pub fn new(character: Character) -> Self {
        Self { character }
    }
}

/// Start a straight walk from the token's current position to `target`.
///
/// Any walk still in progress is replaced; the new one starts from wherever
/// the token is now.
pub fn move_to(commands: &mut Commands, token: Entity, from: &MapPosition, target: Vector2, duration: f32) {
    commands
        .entity(token)
        .insert(TweenPosition::new(from.pos, target, duration));
}
