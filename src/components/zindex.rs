//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component provides a simple way to control the drawing
//! order of entities. Entities with higher z-index values are drawn on top
//! of those with lower values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The map renderer sorts by
/// `ZIndex` to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

/// Layers used by the map scene.
pub const Z_MARKERS: ZIndex = ZIndex(1);
pub const Z_TOKEN: ZIndex = ZIndex(2);
pub const Z_PARCHMENT: ZIndex = ZIndex(3);
pub const Z_PRINT: ZIndex = ZIndex(4);
