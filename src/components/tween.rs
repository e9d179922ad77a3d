//! Linear path animation for movable entities.
//!
//! A [`TweenPosition`] moves an entity's
//! [`MapPosition`](super::mapposition::MapPosition) along a single straight
//! segment over a fixed duration, then stops. It is fire-and-forget: nothing
//! waits on its completion. See [`crate::systems::tween`] for the update
//! system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Animates an entity's position from `from` to `to` over `duration` seconds.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting position.
    pub from: Vector2,
    /// Ending position.
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds played so far, clamped to `duration`.
    pub time: f32,
    /// False once the end of the segment has been reached.
    pub playing: bool,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            time: 0.0,
            playing: true,
        }
    }

    /// Normalised progress in `[0.0, 1.0]`. A zero duration counts as done.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Advance by `dt` seconds and return the interpolated position.
    pub fn step(&mut self, dt: f32) -> Vector2 {
        if self.playing {
            self.time = (self.time + dt.max(0.0)).min(self.duration.max(0.0));
            if self.progress() >= 1.0 {
                self.playing = false;
            }
        }
        lerp_v2(self.from, self.to, self.progress())
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}
