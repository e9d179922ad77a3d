//! Opacity component for fading sprites in and out.
//!
//! The map scene keeps the parchment and its print fully transparent until
//! the sequencer reveals them, so visibility is expressed as an alpha value
//! instead of adding and removing sprites.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Alpha multiplier in `[0.0, 1.0]` applied when drawing.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Opacity {
    pub alpha: f32,
}

impl Opacity {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn hidden() -> Self {
        Self::new(0.0)
    }

    pub fn set(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    /// Multiply the alpha channel of `base` by this opacity.
    pub fn apply(&self, base: Color) -> Color {
        Color::new(
            base.r,
            base.g,
            base.b,
            (base.a as f32 * self.alpha).round() as u8,
        )
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}
