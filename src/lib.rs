//! Ninja Trials map scene library.
//!
//! Exposes the ECS components, resources, systems, events and scene hooks
//! for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
