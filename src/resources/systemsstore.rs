//! Named one-shot systems.
//!
//! Scene hooks are registered with [`bevy_ecs::world::World::register_system`]
//! and stored here under string keys, so the scene observer can run them by
//! name without depending on the functions directly.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

pub const ENTER_MAP: &str = "enter_map";
pub const EXIT_MAP: &str = "exit_map";
pub const QUIT_GAME: &str = "quit_game";

#[derive(Resource, Debug, Default)]
pub struct SystemsStore {
    map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
