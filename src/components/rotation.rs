use bevy_ecs::prelude::Component;

/// Clockwise rotation applied when drawing the sprite.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
