//! Places on the map and their progress markers.
//!
//! Every trial has a [`PlaceMarker`] on the map. The marker sheet has one
//! tile per [`StageStatus`], in declaration order, so the status ordinal is
//! the tile shown. [`crate::systems::place::sync_place_markers`] keeps the
//! sprite tile in step with the status.

use bevy_ecs::prelude::Component;
use std::fmt;
use std::str::FromStr;

/// Progress of a place along the trial path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageStatus {
    #[default]
    Unavailable,
    Selected,
    Activated,
    Finished,
}

impl StageStatus {
    pub const ALL: [StageStatus; 4] = [
        StageStatus::Unavailable,
        StageStatus::Selected,
        StageStatus::Activated,
        StageStatus::Finished,
    ];

    /// Tile of the marker sheet showing this status.
    pub fn tile_index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StageStatus::Unavailable => "unavailable",
            StageStatus::Selected => "selected",
            StageStatus::Activated => "activated",
            StageStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown stage status '{s}'"))
    }
}

/// A place on the map with its marker state.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlaceMarker {
    /// Position of the place along the trial path (0 = first).
    pub ordering: usize,
    pub name: String,
    status: StageStatus,
}

impl PlaceMarker {
    pub fn new(ordering: usize, name: impl Into<String>) -> Self {
        Self {
            ordering,
            name: name.into(),
            status: StageStatus::Unavailable,
        }
    }

    pub fn with_status(mut self, status: StageStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn set_status(&mut self, status: StageStatus) {
        self.status = status;
    }

    pub fn tile_index(&self) -> usize {
        self.status.tile_index()
    }
}
