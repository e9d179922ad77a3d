//! Events and their observers.
//!
//! - [`scene`] – applies pending scene changes and runs scene hooks
//! - [`sequence`] – announces each step of the map sequence

pub mod scene;
pub mod sequence;
