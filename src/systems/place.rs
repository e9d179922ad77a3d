use bevy_ecs::prelude::*;

use crate::components::place::PlaceMarker;
use crate::components::sprite::Sprite;

/// Show each changed marker's status tile.
pub fn sync_place_markers(mut query: Query<(&PlaceMarker, &mut Sprite), Changed<PlaceMarker>>) {
    for (marker, mut sprite) in query.iter_mut() {
        sprite.tile = marker.tile_index();
    }
}
