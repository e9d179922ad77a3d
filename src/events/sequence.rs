//! Event fired each time a map sequence advances.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::sequence::SequenceStep;
use crate::resources::worldtime::WorldTime;

/// `entity` carries the [`MapSequence`](crate::components::sequence::MapSequence)
/// that fired `step`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStepEvent {
    pub entity: Entity,
    pub step: SequenceStep,
}

/// Trace every step the map sequence fires.
pub fn observe_sequence_step(trigger: On<SequenceStepEvent>, world_time: Res<WorldTime>) {
    let event = trigger.event();
    debug!(
        "Sequence {:?} step {} observed at t={:.2}",
        event.entity, event.step, world_time.elapsed
    );
}
