//! Frame animation playback.
//!
//! Advances every [`FrameAnimation`] by the tick delta and shows the current
//! frame by writing it into the entity's [`Sprite`] tile.

use bevy_ecs::prelude::*;

use crate::components::animation::FrameAnimation;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn frame_animation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut FrameAnimation, &mut Sprite)>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        if anim.finished {
            continue;
        }
        anim.advance(world_time.delta);
        if sprite.tile != anim.frame_index {
            sprite.tile = anim.frame_index;
        }
    }
}
