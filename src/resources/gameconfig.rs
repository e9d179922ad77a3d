//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 1920
//! height = 1080
//!
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [map]
//! move_delay = 3.0
//! unfold_delay = 4.0
//! reveal_delay = 4.8
//! move_duration = 1.0
//!
//! [hud]
//! precision_time_round = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::maptoken::DEFAULT_MOVE_DURATION;
use crate::components::sequence::SequenceThresholds;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 1920;
const DEFAULT_RENDER_HEIGHT: u32 = 1080;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_PRECISION_TIME_ROUND: f32 = 2.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Scene width in map units (the map background size).
    pub render_width: u32,
    /// Scene height in map units.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Delays of the map reveal sequence.
    pub map_thresholds: SequenceThresholds,
    /// Seconds the token takes between two places.
    pub move_duration: f32,
    /// Seconds for a whole precision bar cycle.
    pub precision_time_round: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            map_thresholds: SequenceThresholds::default(),
            move_duration: DEFAULT_MOVE_DURATION,
            precision_time_round: DEFAULT_PRECISION_TIME_ROUND,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Invalid map
    /// delays are reported and the previous delays are kept.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [map] section
        let read_f32 = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        let current = self.map_thresholds;
        let move_delay = read_f32("map", "move_delay").unwrap_or(current.move_delay());
        let unfold_delay = read_f32("map", "unfold_delay").unwrap_or(current.unfold_delay());
        let reveal_delay = read_f32("map", "reveal_delay").unwrap_or(current.reveal_delay());
        match SequenceThresholds::try_new(move_delay, unfold_delay, reveal_delay) {
            Ok(thresholds) => self.map_thresholds = thresholds,
            Err(e) => warn!("Ignoring [map] delays: {}", e),
        }
        if let Some(duration) = read_f32("map", "move_duration") {
            if duration >= 0.0 {
                self.move_duration = duration;
            } else {
                warn!("Ignoring negative [map] move_duration {}", duration);
            }
        }

        // [hud] section
        if let Some(time_round) = read_f32("hud", "precision_time_round") {
            if time_round > 0.0 {
                self.precision_time_round = time_round;
            } else {
                warn!("Ignoring non-positive [hud] precision_time_round {}", time_round);
            }
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, fullscreen={}, map delays={:?}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.map_thresholds
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [map] section
        let th = &self.map_thresholds;
        config.set("map", "move_delay", Some(th.move_delay().to_string()));
        config.set("map", "unfold_delay", Some(th.unfold_delay().to_string()));
        config.set("map", "reveal_delay", Some(th.reveal_delay().to_string()));
        config.set("map", "move_duration", Some(self.move_duration.to_string()));

        // [hud] section
        config.set(
            "hud",
            "precision_time_round",
            Some(self.precision_time_round.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the scene size in map units.
    pub fn render_size(&self) -> (f32, f32) {
        (self.render_width as f32, self.render_height as f32)
    }
}
