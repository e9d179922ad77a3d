//! Scene state resources.
//!
//! [`SceneState`] holds the scene being shown and [`NextScene`] any change a
//! system asked for. `crate::events::scene::observe_scene_change_event`
//! applies a pending change and runs the exit/enter hooks.

use bevy_ecs::prelude::Resource;

/// Scenes the game can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    None,
    Map,
    Quitting,
}

/// A requested scene change, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(Scene),
}

/// Authoritative current scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneState {
    current: Scene,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Scene {
        self.current
    }

    /// Replace the current scene without running any hook.
    ///
    /// Request changes through [`NextScene`] when hooks must run.
    pub fn set(&mut self, scene: Scene) {
        self.current = scene;
    }
}

/// Intent to change to another scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextScenes {
        self.next
    }

    /// Mark `scene` as pending. `check_pending_scene` fires the change event.
    pub fn set(&mut self, scene: Scene) {
        self.next = NextScenes::Pending(scene);
    }

    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }
}

/// Set when the game should close; the main loop watches it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuitFlag(pub bool);
