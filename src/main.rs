//! Ninja Trials map scene.
//!
//! Shows the trial map and plays its reveal sequence: the player token walks
//! to the next place, the scroll unfolds and the drawing of the trial is
//! revealed. Built on:
//! - **raylib** for the window, frame timing and drawing
//! - **bevy_ecs** for entities, scene hooks and per-frame systems
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sequencer, place markers, token, parchment, etc.)
//! - [`events`] – scene change and sequence step events
//! - [`game`] – scene hooks that build and tear down the map
//! - [`resources`] – config, session, layout, asset registry, clock
//! - [`systems`] – per-frame systems and rendering
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the map layout, open the window
//! 2. Register the scene observer and hooks, enter the map scene
//! 3. Each frame: advance the clock, run the update schedule, draw
//! 4. Closing the window (or Escape) moves to the quitting scene, which ends
//!    the loop
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --trial jump --character ryoko
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::scene::{SceneChangedEvent, observe_scene_change_event};
use crate::events::sequence::observe_sequence_step;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamesession::{Character, GameSession, Trial};
use crate::resources::maplayout::MapLayout;
use crate::resources::resourcecontext::ResourceContext;
use crate::resources::scene::{NextScene, NextScenes, QuitFlag, Scene, SceneState};
use crate::resources::systemsstore::{ENTER_MAP, EXIT_MAP, QUIT_GAME, SystemsStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::frame_animation_system;
use crate::systems::place::sync_place_markers;
use crate::systems::precisionbar::precision_bar_system;
use crate::systems::render::{fit_camera, render_map};
use crate::systems::scene::{check_pending_scene, scene_is_map};
use crate::systems::sequence::map_sequence_system;
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_mapposition_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

const DEFAULT_LAYOUT_PATH: &str = "assets/map/layout.json";

/// Ninja Trials map scene
#[derive(Parser)]
#[command(version, about = "Plays the Ninja Trials map reveal sequence.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Trial the player is about to play (run, jump, cut or shuriken).
    #[arg(long, default_value = "run")]
    trial: Trial,

    /// Character shown on the map (sho or ryoko). Unknown names use sho.
    #[arg(long, default_value = "sho")]
    character: String,

    /// JSON map layout replacing the built-in one.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Write the built-in map layout as JSON and exit.
    /// Optionally provide a path (default: assets/map/layout.json).
    #[arg(long, value_name = "PATH")]
    dump_layout: Option<Option<PathBuf>>,
}

/// Register a scene hook and keep its system entity alive across scenes.
fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: dump the layout (no window needed)
    if let Some(maybe_path) = cli.dump_layout {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LAYOUT_PATH));
        if let Err(e) = MapLayout::default().save_to_file(&path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Map layout written to {}", path.display());
        return;
    }

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using default settings", e);
    }

    let layout = match &cli.layout {
        Some(path) => MapLayout::load_from_file(path).unwrap_or_else(|e| {
            error!("{}, using the built-in layout", e);
            MapLayout::default()
        }),
        None => MapLayout::default(),
    };
    let session = GameSession::new(cli.trial, Character::parse_or_default(&cli.character));
    info!(
        "Starting map before trial {} with {:?}",
        session.current_trial, session.character
    );

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Ninja Trials");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a scene change
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }
    let (render_w, render_h) = config.render_size();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(layout);
    world.insert_resource(session);
    world.insert_resource(ResourceContext::new());
    world.insert_resource(SceneState::new());
    world.insert_resource(NextScene::new());
    world.insert_resource(QuitFlag::default());

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(observe_sequence_step), Persistent));

    // Registered systems are entities too; hooks are marked Persistent so
    // leaving a scene does not despawn them.
    let mut systems_store = SystemsStore::new();
    register_hook(&mut world, &mut systems_store, ENTER_MAP, game::enter_map);
    register_hook(&mut world, &mut systems_store, EXIT_MAP, game::exit_map);
    register_hook(&mut world, &mut systems_store, QUIT_GAME, game::quit_game);
    world.insert_resource(systems_store);
    world.flush();

    world.resource_mut::<NextScene>().set(Scene::Map);
    world.trigger(SceneChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(check_pending_scene);
    update.add_systems(
        map_sequence_system
            .run_if(scene_is_map)
            .after(check_pending_scene),
    );
    update.add_systems(tween_mapposition_system.after(map_sequence_system));
    update.add_systems(sync_place_markers.after(map_sequence_system));
    update.add_systems(frame_animation_system.after(map_sequence_system));
    update.add_systems(precision_bar_system);

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !world.resource::<QuitFlag>().0 {
        let wants_quit = rl.window_should_close() || rl.is_key_pressed(KeyboardKey::KEY_ESCAPE);
        let quitting = world.resource::<SceneState>().get() == Scene::Quitting
            || world.resource::<NextScene>().get() == NextScenes::Pending(Scene::Quitting);
        if wants_quit && !quitting {
            world.resource_mut::<NextScene>().set(Scene::Quitting);
        }

        update_world_time(&mut world, rl.get_frame_time());
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame

        let camera = fit_camera(
            render_w,
            render_h,
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_map(&mut world, &mut d2);
        }
        d.draw_fps(10, 10);
    }
    info!("Bye");
}
