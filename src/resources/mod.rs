//! ECS resources shared across systems.
//!
//! - [`gameconfig`] – settings loaded from `config.ini`
//! - [`gamesession`] – current trial and character
//! - [`maplayout`] – where things sit on the map
//! - [`resourcecontext`] – resident assets per scene group
//! - [`scene`] – current and requested scene, quit flag
//! - [`systemsstore`] – scene hooks by name
//! - [`worldtime`] – simulation clock

pub mod gameconfig;
pub mod gamesession;
pub mod maplayout;
pub mod resourcecontext;
pub mod scene;
pub mod systemsstore;
pub mod worldtime;
