//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – tile-sheet frame playback
//! - [`mapposition`] – y-up map-space position (sprite centre)
//! - [`maptoken`] – the player token and its walk between places
//! - [`opacity`] – alpha used to hide and reveal sprites
//! - [`parchment`] – the scroll that unfolds and its printed drawing
//! - [`persistent`] – marker for entities that survive scene changes
//! - [`place`] – places on the map and their stage status
//! - [`precisionbar`] – oscillating cursor of the trial HUD
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – uniform scale factor for sprites
//! - [`sequence`] – the timed reveal sequencer of the map scene
//! - [`shurikenenemy`] – strawman target of the shuriken trial
//! - [`sprite`] – tile of a registered atlas to draw
//! - [`tween`] – straight-line position animation
//! - [`zindex`] – draw order

pub mod animation;
pub mod mapposition;
pub mod maptoken;
pub mod opacity;
pub mod parchment;
pub mod persistent;
pub mod place;
pub mod precisionbar;
pub mod rotation;
pub mod scale;
pub mod sequence;
pub mod shurikenenemy;
pub mod sprite;
pub mod tween;
pub mod zindex;
