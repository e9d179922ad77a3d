use bevy_ecs::prelude::Component;

/// Uniform draw scale of a sprite.
#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub factor: f32,
}
impl Scale {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0)
    }
}
