//! ECS systems run every frame, plus the renderer.
//!
//! - [`animation`] – frame animation playback
//! - [`place`] – marker tiles follow stage status
//! - [`precisionbar`] – advances running precision bars
//! - [`render`] – draws the map scene with raylib
//! - [`scene`] – fires pending scene changes
//! - [`sequence`] – applies map sequence steps
//! - [`time`] – advances the world clock
//! - [`tween`] – moves entities along their tweens

pub mod animation;
pub mod place;
pub mod precisionbar;
pub mod render;
pub mod scene;
pub mod sequence;
pub mod time;
pub mod tween;
