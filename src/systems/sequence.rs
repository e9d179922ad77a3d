//! Drives [`MapSequence`] components from the world clock.
//!
//! Each tick feeds `WorldTime.elapsed` to every sequencer. A fired step is
//! applied to the collaborators named by the component, announced with a
//! [`SequenceStepEvent`], and once the sequencer is done the component is
//! removed so the entity stops being ticked.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::maptoken::{MapToken, move_to};
use crate::components::opacity::Opacity;
use crate::components::parchment::{Parchment, ParchmentPrint};
use crate::components::place::{PlaceMarker, StageStatus};
use crate::components::precisionbar::PrecisionBar;
use crate::components::sequence::{MapSequence, SequenceStep};
use crate::events::sequence::SequenceStepEvent;
use crate::resources::worldtime::WorldTime;

#[allow(clippy::type_complexity)]
pub fn map_sequence_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut sequences: Query<(Entity, &mut MapSequence)>,
    tokens: Query<&MapPosition, With<MapToken>>,
    mut places: Query<&mut PlaceMarker>,
    mut scrolls: Query<(&mut Parchment, &mut Opacity), Without<ParchmentPrint>>,
    mut prints: Query<&mut Opacity, With<ParchmentPrint>>,
    mut bars: Query<(&mut PrecisionBar, &mut Opacity), (Without<Parchment>, Without<ParchmentPrint>)>,
) {
    let now = world_time.elapsed;
    for (entity, mut seq) in sequences.iter_mut() {
        let Some(step) = seq.sequencer.on_tick(now) else {
            continue;
        };
        info!("Map sequence {:?} fired {} at t={:.2}", entity, step, now);

        match step {
            SequenceStep::MoveToken => {
                match tokens.get(seq.token) {
                    Ok(from) => move_to(
                        &mut commands,
                        seq.token,
                        from,
                        seq.token_target,
                        seq.move_duration,
                    ),
                    Err(_) => warn!("Map token {:?} not found", seq.token),
                }
                set_place_status(&mut places, seq.current_place, StageStatus::Finished);
            }
            SequenceStep::UnfoldPanel => {
                set_place_status(&mut places, seq.next_place, StageStatus::Selected);
                match scrolls.get_mut(seq.parchment) {
                    Ok((mut parchment, mut opacity)) => {
                        let unfold = parchment.unfold(&mut opacity);
                        commands.entity(seq.parchment).insert(unfold);
                    }
                    Err(_) => warn!("Parchment {:?} not found", seq.parchment),
                }
            }
            SequenceStep::RevealPrint => {
                match scrolls.get_mut(seq.parchment) {
                    Ok((mut parchment, _)) => {
                        if !parchment.is_unfolded() {
                            warn!("Revealing the print of folded parchment {:?}", seq.parchment);
                        }
                        let print = parchment.print;
                        match prints.get_mut(print) {
                            Ok(mut opacity) => parchment.show_print(&mut opacity),
                            Err(_) => warn!("Parchment print {:?} not found", print),
                        }
                    }
                    Err(_) => warn!("Parchment {:?} not found", seq.parchment),
                }
                if let Some(bar) = seq.precision_bar {
                    match bars.get_mut(bar) {
                        Ok((mut precision, mut opacity)) => {
                            opacity.set(1.0);
                            precision.start();
                        }
                        Err(_) => warn!("Precision bar {:?} not found", bar),
                    }
                }
            }
        }

        commands.trigger(SequenceStepEvent { entity, step });

        if seq.sequencer.is_done() {
            commands.entity(entity).remove::<MapSequence>();
        }
    }
}

fn set_place_status(places: &mut Query<&mut PlaceMarker>, place: Entity, status: StageStatus) {
    match places.get_mut(place) {
        Ok(mut marker) => {
            info!("Place '{}' is now {}", marker.name, status);
            marker.set_status(status);
        }
        Err(_) => warn!("Place marker {:?} not found", place),
    }
}
