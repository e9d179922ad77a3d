//! Simulation clock shared by every system.
//!
//! [`WorldTime::elapsed`] is the monotonic "seconds since start" the map
//! sequencer compares its thresholds against; [`WorldTime::delta`] is the
//! length of the current tick used by tweens, animations and the precision
//! bar.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the world was created.
    pub elapsed: f32,
    /// Scaled seconds since the previous tick.
    pub delta: f32,
    pub time_scale: f32,
    /// Number of ticks applied so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
