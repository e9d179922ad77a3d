use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::{NextScene, NextScenes, Scene, SceneState};

/// Fire [`SceneChangedEvent`] when a scene change is pending.
pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if let NextScenes::Pending(_) = next_scene.get() {
        commands.trigger(SceneChangedEvent {});
    }
}

pub fn scene_is_map(scene: Res<SceneState>) -> bool {
    scene.get() == Scene::Map
}
