//! Scene change event and observer.
//!
//! Systems ask for another scene through [`NextScene`];
//! `check_pending_scene` then fires a [`SceneChangedEvent`], and
//! [`observe_scene_change_event`] applies the change to [`SceneState`] and
//! runs the exit hook of the old scene followed by the enter hook of the new
//! one. Hooks are looked up by name in [`SystemsStore`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

use crate::resources::scene::{NextScene, NextScenes, Scene, SceneState};
use crate::resources::systemsstore::{ENTER_MAP, EXIT_MAP, QUIT_GAME, SystemsStore};

/// Apply the pending scene change, if there is one.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: Option<ResMut<NextScene>>,
    mut scene_state: Option<ResMut<SceneState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("SceneChangedEvent triggered");

    let (Some(next_scene), Some(scene_state)) =
        (next_scene.as_deref_mut(), scene_state.as_deref_mut())
    else {
        warn!(
            "Scene resources missing (NextScene: {}, SceneState: {})",
            next_scene.is_some(),
            scene_state.is_some()
        );
        return;
    };

    match next_scene.get() {
        NextScenes::Pending(new_scene) => {
            let old_scene = scene_state.get();
            info!("Transitioning from {:?} to {:?}", old_scene, new_scene);
            scene_state.set(new_scene);
            next_scene.reset();
            on_scene_exit(old_scene, &mut commands, &systems_store);
            on_scene_enter(new_scene, &mut commands, &systems_store);
        }
        NextScenes::Unchanged => debug!("No scene change pending."),
    }
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => commands.run_system(id),
        None => error!("Scene hook '{}' not found in SystemsStore", name),
    }
}

fn on_scene_enter(scene: Scene, commands: &mut Commands, systems_store: &SystemsStore) {
    match scene {
        Scene::None => debug!("Entered None scene"),
        Scene::Map => run_hook(ENTER_MAP, commands, systems_store),
        Scene::Quitting => run_hook(QUIT_GAME, commands, systems_store),
    }
}

fn on_scene_exit(scene: Scene, commands: &mut Commands, systems_store: &SystemsStore) {
    match scene {
        Scene::None => debug!("Exited None scene"),
        Scene::Map => run_hook(EXIT_MAP, commands, systems_store),
        Scene::Quitting => debug!("Exited Quitting scene"),
    }
}
