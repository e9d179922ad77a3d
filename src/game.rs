//! Scene hooks.
//!
//! These one-shot systems are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the scene observer when the map scene is entered or left, or when the game
//! quits.

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use smallvec::SmallVec;

use crate::components::mapposition::MapPosition;
use crate::components::maptoken::{MapToken, TOKEN_TILE};
use crate::components::opacity::Opacity;
use crate::components::parchment::{Parchment, ParchmentPrint};
use crate::components::persistent::Persistent;
use crate::components::place::{PlaceMarker, StageStatus};
use crate::components::precisionbar::PrecisionBar;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sequence::{MapSequence, Sequencer};
use crate::components::sprite::Sprite;
use crate::components::zindex::{Z_MARKERS, Z_PARCHMENT, Z_PRINT, Z_TOKEN, ZIndex};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamesession::{Character, GameSession};
use crate::resources::maplayout::MapLayout;
use crate::resources::resourcecontext::{
    MAP_BACKGROUND, MAP_CH_RYOKO, MAP_CH_SHO, MAP_DRAWINGS, MAP_MARKS, MAP_SCROLL,
    ResourceContext, ResourceGroup,
};
use crate::resources::scene::QuitFlag;
use crate::resources::worldtime::WorldTime;

/// Places on the built-in map; the list never spills to the heap for it.
type PlaceEntities = SmallVec<[Entity; 8]>;

fn sprite_for(resources: &ResourceContext, atlas: &'static str) -> Sprite {
    let (w, h) = resources.frame_size(atlas).unwrap_or_else(|| {
        warn!("Atlas '{}' is not resident", atlas);
        (0.0, 0.0)
    });
    Sprite::new(atlas, w, h)
}

fn token_atlas(character: Character) -> &'static str {
    match character {
        Character::Sho => MAP_CH_SHO,
        Character::Ryoko => MAP_CH_RYOKO,
    }
}

/// Status a place shows when the player stands on `current`.
fn initial_status(place: usize, current: usize) -> StageStatus {
    if place < current {
        StageStatus::Finished
    } else if place == current {
        StageStatus::Selected
    } else {
        StageStatus::Unavailable
    }
}

/// Build the map scene and start its reveal sequence.
pub fn enter_map(
    mut commands: Commands,
    mut resources: ResMut<ResourceContext>,
    layout: Res<MapLayout>,
    session: Res<GameSession>,
    config: Res<GameConfig>,
    world_time: Res<WorldTime>,
) {
    resources.acquire(ResourceGroup::MenuMap);
    resources.acquire(ResourceGroup::Hud);
    let (screen_w, screen_h) = config.render_size();

    let current_idx = session.current_trial.place_index();
    let next_idx = session.next_trial().place_index();
    let (Some(token_start), Some(token_target)) = (
        layout.token_position(current_idx),
        layout.token_position(next_idx),
    ) else {
        error!(
            "Map layout has no place for trial {} or {}",
            session.current_trial,
            session.next_trial()
        );
        return;
    };

    commands.spawn((
        MapPosition::new(screen_w * 0.5, screen_h * 0.5),
        sprite_for(&resources, MAP_BACKGROUND),
        ZIndex(0),
    ));

    let places: PlaceEntities = layout
        .places
        .iter()
        .enumerate()
        .map(|(idx, place)| {
            let marker =
                PlaceMarker::new(idx, place.name.as_str()).with_status(initial_status(idx, current_idx));
            let tile = marker.tile_index();
            commands
                .spawn((
                    marker,
                    MapPosition::from_vec(place.position()),
                    sprite_for(&resources, MAP_MARKS).with_tile(tile),
                    Z_MARKERS,
                ))
                .id()
        })
        .collect();

    let token = commands
        .spawn((
            MapToken::new(session.character),
            MapPosition::from_vec(token_start),
            sprite_for(&resources, token_atlas(session.character)).with_tile(TOKEN_TILE),
            Z_TOKEN,
        ))
        .id();

    let print = commands
        .spawn((
            ParchmentPrint,
            MapPosition::from_vec(layout.print_position(screen_w, screen_h)),
            sprite_for(&resources, MAP_DRAWINGS).with_tile(session.current_trial.drawing_tile()),
            Scale::new(layout.print_scale),
            Rotation {
                degrees: layout.print_rotation,
            },
            Opacity::hidden(),
            Z_PRINT,
        ))
        .id();

    let parchment = commands
        .spawn((
            Parchment::new(print),
            MapPosition::from_vec(layout.parchment_position(screen_w, screen_h)),
            sprite_for(&resources, MAP_SCROLL),
            Opacity::hidden(),
            Z_PARCHMENT,
        ))
        .id();

    // hidden and stopped until the print is revealed
    let precision_bar = commands
        .spawn((
            PrecisionBar::new(config.precision_time_round),
            MapPosition::from_vec(layout.bar_position(screen_w, screen_h)),
            Opacity::hidden(),
        ))
        .id();

    let now = world_time.elapsed;
    commands.spawn(MapSequence {
        sequencer: Sequencer::new(config.map_thresholds).started_at(now),
        token,
        token_target,
        move_duration: config.move_duration,
        current_place: places[current_idx],
        next_place: places[next_idx],
        parchment,
        precision_bar: Some(precision_bar),
    });

    info!(
        "Map scene ready: {} places, {} with {:?}, sequence started at t={:.2}",
        places.len(),
        session.current_trial,
        session.character,
        now
    );
}

/// Tear the map scene down and release its assets.
pub fn exit_map(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
    mut resources: ResMut<ResourceContext>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    resources.release(ResourceGroup::MenuMap);
    resources.release(ResourceGroup::Hud);
    info!("Map scene closed ({} entities despawned)", count);
}

pub fn quit_game(mut quit: ResMut<QuitFlag>) {
    info!("Quitting game");
    quit.0 = true;
}
