//! The scroll that unfolds on the map to announce the next trial.
//!
//! The scroll and the drawing printed on it are two entities. The scroll
//! carries [`Parchment`], which keeps the print's id so the two reveal steps
//! can be applied without a parent/child hierarchy.

use bevy_ecs::prelude::*;

use crate::components::animation::FrameAnimation;
use crate::components::opacity::Opacity;

/// Frames in the scroll unfold sheet.
pub const UNFOLD_FRAMES: usize = 4;
/// Seconds each unfold frame is shown.
pub const UNFOLD_FRAME_DURATION: f32 = 0.2;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Parchment {
    pub print: Entity,
    unfolded: bool,
    print_shown: bool,
}

impl Parchment {
    pub fn new(print: Entity) -> Self {
        Self {
            print,
            unfolded: false,
            print_shown: false,
        }
    }

    /// Make the scroll visible and return the unfold animation to play on it.
    pub fn unfold(&mut self, scroll: &mut Opacity) -> FrameAnimation {
        scroll.set(1.0);
        self.unfolded = true;
        FrameAnimation::once(UNFOLD_FRAMES, UNFOLD_FRAME_DURATION)
    }

    /// Make the drawing on the scroll visible.
    pub fn show_print(&mut self, print: &mut Opacity) {
        print.set(1.0);
        self.print_shown = true;
    }

    pub fn is_unfolded(&self) -> bool {
        self.unfolded
    }

    pub fn is_print_shown(&self) -> bool {
        self.print_shown
    }
}

/// Marker for the drawing entity printed on a [`Parchment`].
#[derive(Component, Debug, Clone, Copy)]
pub struct ParchmentPrint;
