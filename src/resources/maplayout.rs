//! Map layout resource.
//!
//! Where the places, the token and the parchment sit on the map. The built-in
//! layout matches the map background art; a JSON file with the same shape
//! can replace it.
//!
//! # File Format
//!
//! ```json
//! {
//!   "places": [{ "name": "Run", "x": 184.0, "y": 368.0 }, ...],
//!   "token_offset": { "x": 10.0, "y": 75.0 },
//!   "parchment_anchor": { "x": 0.25, "y": 0.75 },
//!   "print_offset": { "x": -50.0, "y": 0.0 },
//!   "print_scale": 0.8,
//!   "print_rotation": -20.0,
//!   "bar_offset": { "x": 0.0, "y": -480.0 }
//! }
//! ```
//!
//! Coordinates are y-up map units. Missing fields take the built-in values.

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::gamesession::Trial;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f32,
    pub y: f32,
}

impl LayoutPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSpec {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

impl PlaceSpec {
    fn new(name: &str, x: f32, y: f32) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayout {
    /// Places in path order; the first four belong to the trials.
    pub places: Vec<PlaceSpec>,
    /// Token position relative to the place it stands on.
    pub token_offset: LayoutPoint,
    /// Parchment position as a fraction of the screen size.
    pub parchment_anchor: LayoutPoint,
    /// Print position relative to the parchment.
    pub print_offset: LayoutPoint,
    pub print_scale: f32,
    /// Print rotation in degrees.
    pub print_rotation: f32,
    /// Precision bar anchor relative to the parchment.
    pub bar_offset: LayoutPoint,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            places: vec![
                PlaceSpec::new("Run", 184.0, 368.0),
                PlaceSpec::new("Jump", 344.0, 370.0),
                PlaceSpec::new("Cut", 920.0, 220.0),
                PlaceSpec::new("Shuriken", 1076.0, 210.0),
                PlaceSpec::new("Air cut", 1322.0, 350.0),
                PlaceSpec::new("Vanish", 1040.0, 572.0),
                PlaceSpec::new("Balance", 966.0, 978.0),
            ],
            token_offset: LayoutPoint::new(10.0, 75.0),
            parchment_anchor: LayoutPoint::new(0.25, 0.75),
            print_offset: LayoutPoint::new(-50.0, 0.0),
            print_scale: 0.8,
            print_rotation: -20.0,
            bar_offset: LayoutPoint::new(0.0, -480.0),
        }
    }
}

impl MapLayout {
    /// Parse a layout from JSON text and check it covers every trial.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let layout: MapLayout =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse map layout: {}", e))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize map layout: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map layout {:?}: {}", path, e))?;
        let layout = Self::from_json(&json)?;
        info!("Loaded map layout from {:?} ({} places)", path, layout.places.len());
        Ok(layout)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {:?}: {}", parent, e))?;
        }
        std::fs::write(path, self.to_json()?)
            .map_err(|e| format!("Failed to write map layout {:?}: {}", path, e))?;
        info!("Saved map layout to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        let needed = Trial::ALL
            .iter()
            .map(|t| t.place_index())
            .max()
            .unwrap_or(0)
            + 1;
        if self.places.len() < needed {
            return Err(format!(
                "Map layout has {} places, at least {} are needed for the trials",
                self.places.len(),
                needed
            ));
        }
        Ok(())
    }

    pub fn place_position(&self, index: usize) -> Option<Vector2> {
        self.places.get(index).map(PlaceSpec::position)
    }

    /// Where the token stands when it is on place `index`.
    pub fn token_position(&self, index: usize) -> Option<Vector2> {
        self.place_position(index).map(|p| Vector2 {
            x: p.x + self.token_offset.x,
            y: p.y + self.token_offset.y,
        })
    }

    pub fn parchment_position(&self, screen_w: f32, screen_h: f32) -> Vector2 {
        Vector2 {
            x: screen_w * self.parchment_anchor.x,
            y: screen_h * self.parchment_anchor.y,
        }
    }

    pub fn print_position(&self, screen_w: f32, screen_h: f32) -> Vector2 {
        let parchment = self.parchment_position(screen_w, screen_h);
        Vector2 {
            x: parchment.x + self.print_offset.x,
            y: parchment.y + self.print_offset.y,
        }
    }

    /// Anchor of the precision bar, below the parchment.
    pub fn bar_position(&self, screen_w: f32, screen_h: f32) -> Vector2 {
        let parchment = self.parchment_position(screen_w, screen_h);
        Vector2 {
            x: parchment.x + self.bar_offset.x,
            y: parchment.y + self.bar_offset.y,
        }
    }
}
