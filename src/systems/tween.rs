//! Tween animation system.
//!
//! [`tween_mapposition_system`] advances every playing
//! [`TweenPosition`](crate::components::tween::TweenPosition) by the tick
//! delta from [`WorldTime`](crate::resources::worldtime::WorldTime) and
//! writes the interpolated point into the entity's
//! [`MapPosition`](crate::components::mapposition::MapPosition). Finished
//! tweens are removed so a later move can start from the new position.

use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::debug;

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut mp, mut tw) in query.iter_mut() {
        mp.pos = tw.step(dt);
        if !tw.playing {
            debug!("Tween on {:?} reached ({}, {})", entity, mp.pos.x, mp.pos.y);
            commands.entity(entity).remove::<TweenPosition>();
        }
    }
}
