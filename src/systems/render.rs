//! Map scene drawing.
//!
//! Sprites are drawn as tinted quads: texture upload is out of scope, so the
//! [`ResourceContext`] only tells which atlases are resident and how big a
//! tile is. Map space is y-up with the origin at the bottom left of the
//! render area; [`to_screen`] flips it for raylib.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::precisionbar::{CURSOR_Y_OFFSET, PrecisionBar};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::resourcecontext::{
    HUD_PRECISION_BAR, HUD_PRECISION_CURSOR, MAP_BACKGROUND, MAP_CH_RYOKO, MAP_CH_SHO,
    MAP_DRAWINGS, MAP_MARKS, MAP_SCROLL, ResourceContext, SHURIKEN_STRAWMAN,
};

/// Bar size used while the indicator atlas is not resident.
const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 24.0;
const CURSOR_SIZE: f32 = 20.0;

/// Convert a y-up map position into raylib's y-down render space.
pub fn to_screen(pos: Vector2, render_height: f32) -> Vector2 {
    Vector2 {
        x: pos.x,
        y: render_height - pos.y,
    }
}

/// Camera scaling the fixed render area to fit the window, centred.
pub fn fit_camera(render_w: f32, render_h: f32, window_w: f32, window_h: f32) -> Camera2D {
    let zoom = if render_w > 0.0 && render_h > 0.0 {
        (window_w / render_w).min(window_h / render_h)
    } else {
        1.0
    };
    Camera2D {
        offset: Vector2 {
            x: (window_w - render_w * zoom) * 0.5,
            y: (window_h - render_h * zoom) * 0.5,
        },
        target: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom,
    }
}

fn atlas_color(atlas: &str, tile: usize) -> Color {
    match atlas {
        MAP_BACKGROUND => Color::new(222, 204, 160, 255),
        // one shade per stage status
        MAP_MARKS => [Color::GRAY, Color::GOLD, Color::ORANGE, Color::DARKGREEN]
            .get(tile)
            .copied()
            .unwrap_or(Color::GRAY),
        MAP_CH_SHO => Color::DARKBLUE,
        MAP_CH_RYOKO => Color::MAROON,
        MAP_SCROLL => Color::new(245, 235, 205, 255),
        MAP_DRAWINGS => Color::BROWN,
        SHURIKEN_STRAWMAN => Color::BEIGE,
        _ => Color::MAGENTA,
    }
}

#[derive(Clone)]
struct Drawable {
    sprite: Sprite,
    pos: Vector2,
    z: ZIndex,
    scale: f32,
    rotation: f32,
    alpha: Opacity,
}

/// Draw the scene inside a 2D mode whose camera comes from [`fit_camera`].
pub fn render_map(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let (render_w, render_h) = world.resource::<GameConfig>().render_size();

    let mut to_draw: Vec<Drawable> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            &ZIndex,
            Option<&Scale>,
            Option<&Rotation>,
            Option<&Opacity>,
        )>();
        q.iter(world)
            .filter(|(_, _, _, _, _, alpha)| alpha.is_none_or(|a| a.is_visible()))
            .map(|(sprite, pos, z, scale, rotation, alpha)| Drawable {
                sprite: sprite.clone(),
                pos: pos.pos,
                z: *z,
                scale: scale.map_or(1.0, |s| s.factor),
                rotation: rotation.map_or(0.0, |r| r.degrees),
                alpha: alpha.copied().unwrap_or_default(),
            })
            .collect()
    };
    to_draw.sort_by_key(|d| d.z);

    // (anchor, cursor) pairs in map space
    let bars: Vec<(Vector2, Vector2)> = {
        let mut q = world.query::<(&PrecisionBar, &MapPosition, Option<&Opacity>)>();
        q.iter(world)
            .filter(|(_, _, alpha)| alpha.is_none_or(|a| a.is_visible()))
            .map(|(bar, pos, _)| {
                let cursor = Vector2 {
                    x: bar.cursor_x(pos.pos.x),
                    y: pos.pos.y + CURSOR_Y_OFFSET,
                };
                (pos.pos, cursor)
            })
            .collect()
    };

    let resources = world.resource::<ResourceContext>();
    for item in to_draw.iter() {
        if !resources.is_resident(item.sprite.atlas) {
            continue;
        }
        let w = item.sprite.width * item.scale;
        let h = item.sprite.height * item.scale;
        let centre = to_screen(item.pos, render_h);
        let dest = Rectangle {
            x: centre.x,
            y: centre.y,
            width: w,
            height: h,
        };
        let origin = Vector2 {
            x: w * 0.5,
            y: h * 0.5,
        };
        let color = item.alpha.apply(atlas_color(item.sprite.atlas, item.sprite.tile));
        d2.draw_rectangle_pro(dest, origin, item.rotation, color);
    }

    let cursor_resident = resources.is_resident(HUD_PRECISION_CURSOR);
    let (bar_w, bar_h) = resources
        .frame_size(HUD_PRECISION_BAR)
        .unwrap_or((BAR_WIDTH, BAR_HEIGHT));
    for (anchor, cursor) in bars {
        let anchor = to_screen(anchor, render_h);
        d2.draw_rectangle(
            (anchor.x - bar_w * 0.5) as i32,
            (anchor.y - bar_h * 0.5) as i32,
            bar_w as i32,
            bar_h as i32,
            Color::DARKGRAY,
        );
        let cursor = to_screen(cursor, render_h);
        let cursor_color = if cursor_resident { Color::RED } else { Color::PINK };
        d2.draw_triangle(
            Vector2 {
                x: cursor.x - CURSOR_SIZE * 0.5,
                y: cursor.y - CURSOR_SIZE * 0.5,
            },
            Vector2 {
                x: cursor.x,
                y: cursor.y + CURSOR_SIZE * 0.5,
            },
            Vector2 {
                x: cursor.x + CURSOR_SIZE * 0.5,
                y: cursor.y - CURSOR_SIZE * 0.5,
            },
            cursor_color,
        );
    }

    d2.draw_rectangle_lines(0, 0, render_w as i32, render_h as i32, Color::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_flips_y() {
        let p = to_screen(Vector2 { x: 184.0, y: 368.0 }, 1080.0);
        assert_eq!(p.x, 184.0);
        assert_eq!(p.y, 712.0);
    }

    #[test]
    fn test_fit_camera_letterboxes() {
        let cam = fit_camera(1920.0, 1080.0, 1280.0, 720.0);
        assert!((cam.zoom - 2.0 / 3.0).abs() < 1e-6);
        assert!(cam.offset.x.abs() < 1e-3);

        let tall = fit_camera(1920.0, 1080.0, 960.0, 1080.0);
        assert_eq!(tall.zoom, 0.5);
        assert_eq!(tall.offset.x, 0.0);
        assert_eq!(tall.offset.y, 270.0);
    }

    #[test]
    fn test_marker_colors_follow_tile() {
        assert_eq!(atlas_color(MAP_MARKS, 3), Color::DARKGREEN);
        assert_eq!(atlas_color(MAP_MARKS, 9), Color::GRAY);
        assert_eq!(atlas_color("unknown", 0), Color::MAGENTA);
    }
}
