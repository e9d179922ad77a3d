//! Scene-scoped asset registry.
//!
//! The [`ResourceContext`] resource tracks which assets are resident and
//! their tile geometry. Scenes acquire the [`ResourceGroup`] they need when
//! they enter and release it when they exit; nothing is reachable through a
//! global. Acquiring an asset that is already resident is skipped, and
//! releasing drops only the assets of that group.
//!
//! The manifest below mirrors the game's asset folders. Sprites look up their
//! frame size here when they are spawned, and the renderer skips sprites
//! whose atlas is not resident.

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::fmt;

/// Kind of asset described by the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A texture cut into `columns` x `rows` equally sized tiles.
    Texture {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },
    Music,
}

/// One manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub key: &'static str,
    pub file: &'static str,
    pub kind: AssetKind,
}

const fn tiled(
    key: &'static str,
    file: &'static str,
    width: u32,
    height: u32,
    columns: u32,
    rows: u32,
) -> AssetSpec {
    AssetSpec {
        key,
        file,
        kind: AssetKind::Texture {
            width,
            height,
            columns,
            rows,
        },
    }
}

pub const MAP_BACKGROUND: &str = "menu_map_background";
pub const MAP_MARKS: &str = "menu_map_background_marks";
pub const MAP_CH_SHO: &str = "menu_map_ch_sho";
pub const MAP_CH_RYOKO: &str = "menu_map_ch_ryoko";
pub const MAP_DRAWINGS: &str = "menu_map_drawings";
pub const MAP_SCROLL: &str = "menu_map_scroll";
pub const MAP_MUSIC: &str = "map_music";
pub const HUD_PRECISION_BAR: &str = "hud_precision_indicator";
pub const HUD_PRECISION_CURSOR: &str = "hud_precision_cursor";
pub const SHURIKEN_STRAWMAN: &str = "shuriken_strawman_1";

const MENU_MAP_ASSETS: &[AssetSpec] = &[
    tiled(MAP_BACKGROUND, "gfx/menus/menu_map_background.png", 1920, 1080, 1, 1),
    tiled(MAP_MARKS, "gfx/menus/menu_map_background_marks.png", 94, 152, 1, 4),
    tiled(MAP_CH_SHO, "gfx/menus/menu_map_ch_sho.png", 192, 330, 2, 2),
    tiled(MAP_CH_RYOKO, "gfx/menus/menu_map_ch_ryoko.png", 192, 330, 2, 2),
    tiled(MAP_DRAWINGS, "gfx/menus/menu_map_drawings.png", 1106, 962, 2, 2),
    tiled(MAP_SCROLL, "gfx/menus/menu_map_scroll.png", 1568, 1632, 2, 2),
    AssetSpec {
        key: MAP_MUSIC,
        file: "music/map.ogg",
        kind: AssetKind::Music,
    },
];

const HUD_ASSETS: &[AssetSpec] = &[
    tiled(HUD_PRECISION_BAR, "gfx/hud/hud_precision_indicator.png", 240, 120, 1, 1),
    tiled(HUD_PRECISION_CURSOR, "gfx/hud/hud_precision_cursor.png", 59, 52, 1, 1),
];

const SHURIKEN_ASSETS: &[AssetSpec] = &[tiled(
    SHURIKEN_STRAWMAN,
    "gfx/trial_shuriken/shuriken_strawman_1.png",
    1023,
    640,
    3,
    1,
)];

/// Assets loaded and unloaded together by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceGroup {
    MenuMap,
    Hud,
    ShurikenTrial,
}

impl ResourceGroup {
    pub fn manifest(self) -> &'static [AssetSpec] {
        match self {
            ResourceGroup::MenuMap => MENU_MAP_ASSETS,
            ResourceGroup::Hud => HUD_ASSETS,
            ResourceGroup::ShurikenTrial => SHURIKEN_ASSETS,
        }
    }
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceGroup::MenuMap => "menu_map",
            ResourceGroup::Hud => "hud",
            ResourceGroup::ShurikenTrial => "shuriken_trial",
        };
        f.write_str(name)
    }
}

/// Registry of resident assets, keyed by asset key.
#[derive(Resource, Debug, Default)]
pub struct ResourceContext {
    resident: FxHashMap<&'static str, AssetSpec>,
}

impl ResourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every asset of `group` resident. Returns how many were newly added.
    pub fn acquire(&mut self, group: ResourceGroup) -> usize {
        let mut added = 0;
        for spec in group.manifest() {
            if self.resident.contains_key(spec.key) {
                debug!("Asset '{}' already resident, skipping", spec.key);
                continue;
            }
            self.resident.insert(spec.key, *spec);
            added += 1;
        }
        info!("Acquired resource group {} ({} new assets)", group, added);
        added
    }

    /// Drop every asset of `group`. Returns how many were removed.
    pub fn release(&mut self, group: ResourceGroup) -> usize {
        let mut removed = 0;
        for spec in group.manifest() {
            if self.resident.remove(spec.key).is_some() {
                removed += 1;
            }
        }
        if removed == 0 {
            warn!("Released resource group {} but none of its assets were resident", group);
        } else {
            info!("Released resource group {} ({} assets)", group, removed);
        }
        removed
    }

    pub fn is_resident(&self, key: &str) -> bool {
        self.resident.contains_key(key)
    }

    pub fn is_group_resident(&self, group: ResourceGroup) -> bool {
        group.manifest().iter().all(|spec| self.is_resident(spec.key))
    }

    pub fn get(&self, key: &str) -> Option<&AssetSpec> {
        self.resident.get(key)
    }

    /// Size of one tile of a resident texture.
    pub fn frame_size(&self, key: &str) -> Option<(f32, f32)> {
        match self.resident.get(key)?.kind {
            AssetKind::Texture {
                width,
                height,
                columns,
                rows,
            } => Some((
                width as f32 / columns.max(1) as f32,
                height as f32 / rows.max(1) as f32,
            )),
            AssetKind::Music => None,
        }
    }

    /// Number of tiles of a resident texture.
    pub fn tile_count(&self, key: &str) -> Option<usize> {
        match self.resident.get(key)?.kind {
            AssetKind::Texture { columns, rows, .. } => Some((columns * rows) as usize),
            AssetKind::Music => None,
        }
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }
}
