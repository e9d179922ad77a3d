//! Timed reveal sequence played on the map scene.
//!
//! The [`Sequencer`] is a small monotonic state machine driven by absolute
//! time. Once started it waits for three thresholds measured from the start
//! instant and fires one [`SequenceStep`] per crossing:
//!
//! ```text
//! AwaitMove --move_delay--> AwaitUnfold --unfold_delay--> AwaitReveal --reveal_delay--> Done
//!           MoveToken                   UnfoldPanel                     RevealPrint
//! ```
//!
//! Only the threshold of the current state is ever compared, so a late tick
//! that has already passed several thresholds fires a single step; the
//! following ticks fire the rest in order. After `Done` the sequencer is
//! deregistered and ignores further ticks.
//!
//! # Related
//!
//! - [`MapSequence`] – ECS component binding a sequencer to its collaborators
//! - [`crate::systems::sequence::map_sequence_system`] – applies the steps
//! - [`crate::events::sequence::SequenceStepEvent`] – emitted for each step

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use std::fmt;

pub const DEFAULT_MOVE_DELAY: f32 = 3.0;
pub const DEFAULT_UNFOLD_DELAY: f32 = 4.0;
pub const DEFAULT_REVEAL_DELAY: f32 = 4.8;

/// Where the sequence currently is. Variants are ordered; the state only
/// ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceState {
    AwaitMove,
    AwaitUnfold,
    AwaitReveal,
    Done,
}

/// The externally visible effect fired by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceStep {
    /// Move the token to the next place and mark the previous place finished.
    MoveToken,
    /// Select the next place and unfold the parchment.
    UnfoldPanel,
    /// Show the drawing printed on the parchment and start the precision bar.
    RevealPrint,
}

impl fmt::Display for SequenceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceStep::MoveToken => "move_token",
            SequenceStep::UnfoldPanel => "unfold_panel",
            SequenceStep::RevealPrint => "reveal_print",
        };
        f.write_str(name)
    }
}

/// The three delays, in seconds from the start instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceThresholds {
    move_delay: f32,
    unfold_delay: f32,
    reveal_delay: f32,
}

impl SequenceThresholds {
    /// Build thresholds from trusted constants.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < move_delay < unfold_delay < reveal_delay`.
    pub fn new(move_delay: f32, unfold_delay: f32, reveal_delay: f32) -> Self {
        match Self::try_new(move_delay, unfold_delay, reveal_delay) {
            Ok(thresholds) => thresholds,
            Err(e) => panic!("{e}"),
        }
    }

    /// Build thresholds from untrusted values such as a config file.
    pub fn try_new(move_delay: f32, unfold_delay: f32, reveal_delay: f32) -> Result<Self, String> {
        let all_finite = move_delay.is_finite() && unfold_delay.is_finite() && reveal_delay.is_finite();
        if !all_finite || move_delay <= 0.0 {
            return Err(format!(
                "Sequence delays must be finite and positive: {move_delay}, {unfold_delay}, {reveal_delay}"
            ));
        }
        if !(move_delay < unfold_delay && unfold_delay < reveal_delay) {
            return Err(format!(
                "Sequence delays must be strictly increasing: {move_delay}, {unfold_delay}, {reveal_delay}"
            ));
        }
        Ok(Self {
            move_delay,
            unfold_delay,
            reveal_delay,
        })
    }

    pub fn move_delay(&self) -> f32 {
        self.move_delay
    }

    pub fn unfold_delay(&self) -> f32 {
        self.unfold_delay
    }

    pub fn reveal_delay(&self) -> f32 {
        self.reveal_delay
    }

    /// Threshold guarding the transition out of `state`, if any.
    fn for_state(&self, state: SequenceState) -> Option<f32> {
        match state {
            SequenceState::AwaitMove => Some(self.move_delay),
            SequenceState::AwaitUnfold => Some(self.unfold_delay),
            SequenceState::AwaitReveal => Some(self.reveal_delay),
            SequenceState::Done => None,
        }
    }
}

impl Default for SequenceThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_DELAY, DEFAULT_UNFOLD_DELAY, DEFAULT_REVEAL_DELAY)
    }
}

/// Time-gated state machine. Not started until [`Sequencer::start`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequencer {
    state: SequenceState,
    started_at: Option<f32>,
    thresholds: SequenceThresholds,
    registered: bool,
}

impl Sequencer {
    pub fn new(thresholds: SequenceThresholds) -> Self {
        Self {
            state: SequenceState::AwaitMove,
            started_at: None,
            thresholds,
            registered: false,
        }
    }

    /// Record `now` as the start instant and begin listening to ticks.
    ///
    /// Starting a sequencer twice is a no-op; the clock is read-only once set.
    pub fn start(&mut self, now: f32) {
        if self.started_at.is_some() {
            return;
        }
        self.started_at = Some(now);
        self.state = SequenceState::AwaitMove;
        self.registered = true;
    }

    /// Builder form of [`Sequencer::start`].
    pub fn started_at(mut self, now: f32) -> Self {
        self.start(now);
        self
    }

    /// Feed the current absolute time. Returns the step fired by this tick.
    pub fn on_tick(&mut self, now: f32) -> Option<SequenceStep> {
        if !self.registered {
            return None;
        }
        let start = self.started_at?;
        let threshold = self.thresholds.for_state(self.state)?;
        if now - start < threshold {
            return None;
        }
        let (next, step) = match self.state {
            SequenceState::AwaitMove => (SequenceState::AwaitUnfold, SequenceStep::MoveToken),
            SequenceState::AwaitUnfold => (SequenceState::AwaitReveal, SequenceStep::UnfoldPanel),
            SequenceState::AwaitReveal => (SequenceState::Done, SequenceStep::RevealPrint),
            SequenceState::Done => return None,
        };
        self.state = next;
        if next == SequenceState::Done {
            self.registered = false;
        }
        Some(step)
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn start_time(&self) -> Option<f32> {
        self.started_at
    }

    pub fn thresholds(&self) -> &SequenceThresholds {
        &self.thresholds
    }

    /// Whether the sequencer still wants ticks.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn is_done(&self) -> bool {
        self.state == SequenceState::Done
    }
}

/// Binds a [`Sequencer`] to the map-scene entities it drives.
///
/// The sequencer owns none of these entities; it only holds their ids,
/// passed in when the scene is built.
#[derive(Component, Debug, Clone)]
pub struct MapSequence {
    pub sequencer: Sequencer,
    /// Entity carrying [`MapToken`](crate::components::maptoken::MapToken).
    pub token: Entity,
    /// Token destination, already offset from the next place.
    pub token_target: Vector2,
    /// Seconds the token takes to reach `token_target`.
    pub move_duration: f32,
    pub current_place: Entity,
    pub next_place: Entity,
    /// Scroll entity carrying [`Parchment`](crate::components::parchment::Parchment).
    pub parchment: Entity,
    /// HUD bar shown and started with the print, if the scene has one.
    pub precision_bar: Option<Entity>,
}
