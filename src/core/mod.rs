//! Core game module - states, events, tuning and fundamental resources.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod data;
mod error;
mod events;
mod plugin;
mod pulse;
mod rng;
mod states;

pub use config::*;
pub use data::{load_ron_file, parse_ron};
pub use error::DataLoadError;
pub use events::*;
pub use plugin::{ArenaSet, CorePlugin, MatchEntity};
pub use pulse::*;
pub use rng::*;
pub use states::*;
