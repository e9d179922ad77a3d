//! Strawman target of the shuriken trial.
//!
//! The enemy appears at the back right of the field and walks left along a
//! single lane. Lane changes are not modelled.
//!
//! The map scene never spawns one. [`spawn_shuriken_enemy`] is the entry
//! point for the shuriken trial scene, which this crate does not build; only
//! the tests here call it.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::sprite::Sprite;
use crate::components::tween::TweenPosition;
use crate::components::zindex::Z_TOKEN;
use crate::resources::resourcecontext::{ResourceContext, SHURIKEN_STRAWMAN};

/// Tile of the strawman sheet shown while walking.
const WALK_TILE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyDirection {
    Left,
    #[default]
    Right,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ShurikenEnemy {
    pub lives: u32,
    /// Fraction of the screen width crossed per second.
    pub speed: f32,
    pub direction: EnemyDirection,
    player_hit: bool,
}

impl ShurikenEnemy {
    pub fn new(lives: u32, speed: f32) -> Self {
        Self {
            lives,
            speed,
            direction: EnemyDirection::default(),
            player_hit: false,
        }
    }

    /// Where the enemy can be aimed at, or `None` once it has hit the player.
    pub fn position(&self, at: &MapPosition) -> Option<Vector2> {
        if self.player_hit { None } else { Some(at.pos) }
    }

    pub fn hit_player(&mut self) {
        self.player_hit = true;
    }

    pub fn has_hit_player(&self) -> bool {
        self.player_hit
    }

    pub fn hide(&self, opacity: &mut Opacity) {
        opacity.set(0.0);
    }
}

/// Start and end of the enemy walk on a `screen_w` x `screen_h` field, and
/// the seconds it takes at `speed`.
pub fn walk_path(screen_w: f32, screen_h: f32, speed: f32) -> (Vector2, Vector2, Option<f32>) {
    let from = Vector2 {
        x: screen_w * 9.0 / 10.0,
        y: screen_h * 4.0 / 5.0,
    };
    let to = Vector2 {
        x: screen_w / 10.0,
        y: from.y,
    };
    let duration = if speed > 0.0 && screen_w > 0.0 {
        Some((from.x - to.x) / (speed * screen_w))
    } else {
        None
    };
    (from, to, duration)
}

/// Spawn a strawman and start its walk across the field.
pub fn spawn_shuriken_enemy(
    commands: &mut Commands,
    resources: &ResourceContext,
    screen_w: f32,
    screen_h: f32,
    lives: u32,
    speed: f32,
) -> Entity {
    let (from, to, duration) = walk_path(screen_w, screen_h, speed);
    let (w, h) = resources.frame_size(SHURIKEN_STRAWMAN).unwrap_or_else(|| {
        warn!("Atlas '{}' is not resident, strawman has no size", SHURIKEN_STRAWMAN);
        (0.0, 0.0)
    });
    let mut entity = commands.spawn((
        ShurikenEnemy::new(lives, speed),
        MapPosition::from_vec(from),
        Sprite::new(SHURIKEN_STRAWMAN, w, h).with_tile(WALK_TILE),
        Opacity::default(),
        Z_TOKEN,
    ));
    match duration {
        Some(duration) => {
            entity.insert(TweenPosition::new(from, to, duration));
        }
        None => warn!("Strawman speed {} is not positive, it will not walk", speed),
    }
    entity.id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_path() {
        let (from, to, duration) = walk_path(1920.0, 1080.0, 0.2);
        assert_eq!(from.x, 1728.0);
        assert_eq!(from.y, 864.0);
        assert_eq!(to.x, 192.0);
        assert_eq!(to.y, 864.0);
        // 1536 / (0.2 * 1920)
        assert!((duration.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_speed_has_no_duration() {
        assert_eq!(walk_path(1920.0, 1080.0, 0.0).2, None);
    }

    #[test]
    fn test_position_gone_after_hit() {
        let mut enemy = ShurikenEnemy::new(3, 0.2);
        let at = MapPosition::new(10.0, 20.0);
        assert_eq!(enemy.position(&at), Some(at.pos));
        enemy.hit_player();
        assert!(enemy.has_hit_player());
        assert_eq!(enemy.position(&at), None);
    }

    #[test]
    fn test_hide() {
        let enemy = ShurikenEnemy::new(1, 0.2);
        let mut opacity = Opacity::default();
        enemy.hide(&mut opacity);
        assert!(!opacity.is_visible());
    }

    #[test]
    fn test_spawn_starts_walk() {
        let mut world = World::new();
        let mut resources = ResourceContext::new();
        resources.acquire(crate::resources::resourcecontext::ResourceGroup::ShurikenTrial);
        let e = {
            let mut commands = world.commands();
            spawn_shuriken_enemy(&mut commands, &resources, 1920.0, 1080.0, 3, 0.2)
        };
        world.flush();
        let sprite = world.get::<Sprite>(e).unwrap();
        assert_eq!(sprite.width, 341.0);
        assert_eq!(sprite.tile, 1);
        assert_eq!(world.get::<TweenPosition>(e).unwrap().to.x, 192.0);
        assert_eq!(world.get::<ShurikenEnemy>(e).unwrap().lives, 3);
    }
}
