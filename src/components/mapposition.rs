//! World-space position of an entity.
//!
//! Map coordinates are y-up with the origin at the bottom-left corner of the
//! map background, the way the map layout is authored. The renderer flips
//! them into raylib screen space.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
