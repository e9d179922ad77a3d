//! Frame-based sprite animation.
//!
//! A [`FrameAnimation`] walks the tiles of the entity's
//! [`Sprite`](crate::components::sprite::Sprite) atlas at a fixed frame
//! duration. The parchment unfold is the main user: four frames of 0.2 s
//! played once, holding the last frame.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Component)]
pub struct FrameAnimation {
    pub frame_count: usize,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Set once the last frame is reached.
    pub finished: bool,
}

impl FrameAnimation {
    pub fn once(frame_count: usize, frame_duration: f32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration,
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Advance the playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.finished || self.frame_duration <= 0.0 {
            return;
        }
        self.elapsed_time += dt;
        while self.elapsed_time >= self.frame_duration {
            self.elapsed_time -= self.frame_duration;
            self.frame_index += 1;
            if self.frame_index >= self.frame_count {
                self.frame_index = self.frame_count - 1; // stay on last frame
                self.finished = true;
                self.elapsed_time = 0.0;
                break;
            }
        }
    }
}
