use bevy_ecs::prelude::Component;

/// A sprite drawn from a tiled atlas registered in the
/// [`ResourceContext`](crate::resources::resourcecontext::ResourceContext).
///
/// `tile` selects the frame (row-major) inside the atlas. Width and height are
/// the frame size in map units; the sprite is centred on its
/// [`MapPosition`](crate::components::mapposition::MapPosition).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub atlas: &'static str,
    pub tile: usize,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(atlas: &'static str, width: f32, height: f32) -> Self {
        Self {
            atlas,
            tile: 0,
            width,
            height,
        }
    }

    pub fn with_tile(mut self, tile: usize) -> Self {
        self.tile = tile;
        self
    }
}
