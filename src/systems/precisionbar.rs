use bevy_ecs::prelude::*;

use crate::components::precisionbar::PrecisionBar;
use crate::resources::worldtime::WorldTime;

/// Advance every running precision bar by the tick delta.
pub fn precision_bar_system(world_time: Res<WorldTime>, mut bars: Query<&mut PrecisionBar>) {
    for mut bar in bars.iter_mut() {
        if bar.is_running() {
            bar.update(world_time.delta);
        }
    }
}
