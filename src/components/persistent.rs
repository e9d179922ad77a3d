//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive scene transitions.
//! Everything else belongs to the scene that spawned it and is despawned
//! when that scene exits.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
