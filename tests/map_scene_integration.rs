//! Map scene integration tests: scene hooks, the reveal sequence and teardown,
//! driven frame by frame the way the main loop does it.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use ninjatrials::components::animation::FrameAnimation;
use ninjatrials::components::mapposition::MapPosition;
use ninjatrials::components::maptoken::MapToken;
use ninjatrials::components::opacity::Opacity;
use ninjatrials::components::parchment::{Parchment, ParchmentPrint};
use ninjatrials::components::persistent::Persistent;
use ninjatrials::components::place::{PlaceMarker, StageStatus};
use ninjatrials::components::precisionbar::PrecisionBar;
use ninjatrials::components::sequence::{MapSequence, SequenceStep};
use ninjatrials::components::sprite::Sprite;
use ninjatrials::events::scene::{SceneChangedEvent, observe_scene_change_event};
use ninjatrials::events::sequence::{SequenceStepEvent, observe_sequence_step};
use ninjatrials::game;
use ninjatrials::resources::gameconfig::GameConfig;
use ninjatrials::resources::gamesession::{Character, GameSession, Trial};
use ninjatrials::resources::maplayout::MapLayout;
use ninjatrials::resources::resourcecontext::{
    MAP_CH_RYOKO, MAP_DRAWINGS, ResourceContext, ResourceGroup,
};
use ninjatrials::resources::scene::{NextScene, QuitFlag, Scene, SceneState};
use ninjatrials::resources::systemsstore::{ENTER_MAP, EXIT_MAP, QUIT_GAME, SystemsStore};
use ninjatrials::resources::worldtime::WorldTime;
use ninjatrials::systems::animation::frame_animation_system;
use ninjatrials::systems::place::sync_place_markers;
use ninjatrials::systems::precisionbar::precision_bar_system;
use ninjatrials::systems::scene::{check_pending_scene, scene_is_map};
use ninjatrials::systems::sequence::map_sequence_system;
use ninjatrials::systems::time::update_world_time;
use ninjatrials::systems::tween::tween_mapposition_system;

const FRAME: f32 = 0.1;
const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct StepLog(Vec<SequenceStep>);

fn make_world(trial: Trial, character: Character) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(MapLayout::default());
    world.insert_resource(GameSession::new(trial, character));
    world.insert_resource(ResourceContext::new());
    world.insert_resource(SceneState::new());
    world.insert_resource(NextScene::new());
    world.insert_resource(QuitFlag::default());
    world.insert_resource(StepLog::default());

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(observe_sequence_step), Persistent));
    world.spawn((
        Observer::new(|trigger: On<SequenceStepEvent>, mut log: ResMut<StepLog>| {
            log.0.push(trigger.event().step);
        }),
        Persistent,
    ));

    let mut store = SystemsStore::new();
    for (name, id) in [
        (ENTER_MAP, world.register_system(game::enter_map)),
        (EXIT_MAP, world.register_system(game::exit_map)),
        (QUIT_GAME, world.register_system(game::quit_game)),
    ] {
        world.entity_mut(id.entity()).insert(Persistent);
        store.insert(name, id);
    }
    world.insert_resource(store);
    world.flush();
    world
}

fn enter_map(world: &mut World) {
    world.resource_mut::<NextScene>().set(Scene::Map);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

fn make_schedule() -> Schedule {
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
    update.add_systems(precision_bar_system.after(map_sequence_system));
    update
}

fn precision_bar(world: &mut World) -> (PrecisionBar, Opacity) {
    world
        .query::<(&PrecisionBar, &Opacity)>()
        .single(world)
        .map(|(bar, alpha)| (bar.clone(), *alpha))
        .unwrap()
}

fn run_frames(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        update_world_time(world, FRAME);
        schedule.run(world);
        world.clear_trackers();
    }
}

fn marker(world: &mut World, ordering: usize) -> (StageStatus, usize) {
    let mut q = world.query::<(&PlaceMarker, &Sprite)>();
    q.iter(world)
        .find(|(m, _)| m.ordering == ordering)
        .map(|(m, s)| (m.status(), s.tile))
        .unwrap()
}

fn count<C: Component>(world: &mut World) -> usize {
    world.query::<&C>().iter(world).count()
}

fn token_position(world: &mut World) -> MapPosition {
    *world
        .query_filtered::<&MapPosition, With<MapToken>>()
        .single(world)
        .unwrap()
}

#[test]
fn test_enter_map_builds_scene() {
    let mut world = make_world(Trial::Run, Character::Sho);
    enter_map(&mut world);

    assert_eq!(world.resource::<SceneState>().get(), Scene::Map);
    assert!(world.resource::<ResourceContext>().is_group_resident(ResourceGroup::MenuMap));
    assert_eq!(count::<PlaceMarker>(&mut world), 7);
    assert_eq!(marker(&mut world, 0), (StageStatus::Selected, 1));
    assert_eq!(marker(&mut world, 1), (StageStatus::Unavailable, 0));

    let token = token_position(&mut world);
    assert!(approx_eq(token.pos.x, 194.0));
    assert!(approx_eq(token.pos.y, 443.0));

    let scroll_alpha = world
        .query_filtered::<&Opacity, With<Parchment>>()
        .single(&world)
        .unwrap()
        .alpha;
    let print_alpha = world
        .query_filtered::<&Opacity, With<ParchmentPrint>>()
        .single(&world)
        .unwrap()
        .alpha;
    assert_eq!(scroll_alpha, 0.0);
    assert_eq!(print_alpha, 0.0);
    assert_eq!(count::<MapSequence>(&mut world), 1);
    assert!(world.resource::<ResourceContext>().is_group_resident(ResourceGroup::Hud));

    let (bar, bar_alpha) = precision_bar(&mut world);
    assert!(!bar.is_running());
    assert!(!bar_alpha.is_visible());
}

#[test]
fn test_nothing_happens_before_move_delay() {
    let mut world = make_world(Trial::Run, Character::Sho);
    enter_map(&mut world);
    let mut schedule = make_schedule();

    run_frames(&mut world, &mut schedule, 25);
    assert!(world.resource::<StepLog>().0.is_empty());
    assert_eq!(marker(&mut world, 0).0, StageStatus::Selected);
    assert!(approx_eq(token_position(&mut world).pos.x, 194.0));
}

#[test]
fn test_sequence_plays_through() {
    let mut world = make_world(Trial::Run, Character::Sho);
    enter_map(&mut world);
    let mut schedule = make_schedule();

    // 7 seconds: past the reveal and the end of the walk and the unfold
    run_frames(&mut world, &mut schedule, 70);

    assert_eq!(
        world.resource::<StepLog>().0,
        vec![
            SequenceStep::MoveToken,
            SequenceStep::UnfoldPanel,
            SequenceStep::RevealPrint
        ]
    );
    assert_eq!(marker(&mut world, 0), (StageStatus::Finished, 3));
    assert_eq!(marker(&mut world, 1), (StageStatus::Selected, 1));

    let token = token_position(&mut world);
    assert!(approx_eq(token.pos.x, 354.0));
    assert!(approx_eq(token.pos.y, 445.0));

    let (scroll, scroll_sprite, unfold) = world
        .query::<(&Opacity, &Sprite, &FrameAnimation)>()
        .single(&world)
        .map(|(o, s, a)| (*o, s.tile, a.finished))
        .unwrap();
    assert_eq!(scroll.alpha, 1.0);
    assert_eq!(scroll_sprite, 3);
    assert!(unfold);

    let print = world
        .query_filtered::<&Opacity, With<ParchmentPrint>>()
        .single(&world)
        .unwrap()
        .alpha;
    assert_eq!(print, 1.0);
    assert_eq!(count::<MapSequence>(&mut world), 0);

    let (bar, bar_alpha) = precision_bar(&mut world);
    assert!(bar.is_running());
    assert!(bar_alpha.is_visible());

    run_frames(&mut world, &mut schedule, 20);
    assert_eq!(world.resource::<StepLog>().0.len(), 3);
}

#[test]
fn test_precision_bar_runs_off_configured_round() {
    let mut world = make_world(Trial::Run, Character::Sho);
    world.resource_mut::<GameConfig>().precision_time_round = 1.0;
    enter_map(&mut world);
    let mut schedule = make_schedule();

    // 4.5 s: the print is not revealed yet
    run_frames(&mut world, &mut schedule, 45);
    let (bar, _) = precision_bar(&mut world);
    assert!(!bar.is_running());
    assert_eq!(bar.value(), 0.0);

    // a whole round is 1 s, so two more seconds give several reversals
    run_frames(&mut world, &mut schedule, 25);
    let (bar, _) = precision_bar(&mut world);
    assert!(bar.is_running());
    assert_eq!(bar.speed(), 400.0);
    assert!(bar.semicycle() >= 2);
}

#[test]
fn test_later_trial_and_other_character() {
    let mut world = make_world(Trial::Jump, Character::Ryoko);
    enter_map(&mut world);

    assert_eq!(marker(&mut world, 0).0, StageStatus::Finished);
    assert_eq!(marker(&mut world, 1).0, StageStatus::Selected);
    assert_eq!(marker(&mut world, 2).0, StageStatus::Unavailable);

    let token_atlas = world
        .query_filtered::<&Sprite, With<MapToken>>()
        .single(&world)
        .unwrap()
        .atlas;
    assert_eq!(token_atlas, MAP_CH_RYOKO);

    let print = world
        .query_filtered::<&Sprite, With<ParchmentPrint>>()
        .single(&world)
        .unwrap()
        .clone();
    assert_eq!(print.atlas, MAP_DRAWINGS);
    assert_eq!(print.tile, Trial::Jump.drawing_tile());

    let mut schedule = make_schedule();
    run_frames(&mut world, &mut schedule, 70);
    assert_eq!(marker(&mut world, 1).0, StageStatus::Finished);
    assert_eq!(marker(&mut world, 2).0, StageStatus::Selected);
}

#[test]
fn test_quit_tears_down_map() {
    let mut world = make_world(Trial::Run, Character::Sho);
    enter_map(&mut world);
    let mut schedule = make_schedule();
    run_frames(&mut world, &mut schedule, 5);

    world.resource_mut::<NextScene>().set(Scene::Quitting);
    run_frames(&mut world, &mut schedule, 1);

    assert_eq!(world.resource::<SceneState>().get(), Scene::Quitting);
    assert!(world.resource::<QuitFlag>().0);
    assert_eq!(count::<PlaceMarker>(&mut world), 0);
    assert_eq!(count::<MapToken>(&mut world), 0);
    assert_eq!(count::<Sprite>(&mut world), 0);
    assert!(world.resource::<ResourceContext>().is_empty());

    // hooks survive the teardown
    let enter = world.resource::<SystemsStore>().get(ENTER_MAP).unwrap();
    assert!(world.get_entity(enter.entity()).is_ok());
}

#[test]
fn test_reentering_map_restarts_sequence() {
    let mut world = make_world(Trial::Run, Character::Sho);
    enter_map(&mut world);
    let mut schedule = make_schedule();
    run_frames(&mut world, &mut schedule, 35);
    assert_eq!(world.resource::<StepLog>().0, vec![SequenceStep::MoveToken]);

    world.resource_mut::<GameSession>().current_trial = Trial::Jump;
    world.resource_mut::<NextScene>().set(Scene::Map);
    run_frames(&mut world, &mut schedule, 1);

    assert_eq!(count::<PlaceMarker>(&mut world), 7);
    assert_eq!(count::<MapSequence>(&mut world), 1);
    assert_eq!(count::<MapToken>(&mut world), 1);
    assert!(world.resource::<ResourceContext>().is_group_resident(ResourceGroup::MenuMap));
    assert_eq!(marker(&mut world, 1).0, StageStatus::Selected);
}
