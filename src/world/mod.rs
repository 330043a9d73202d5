//! World module - arena layout, cover and scenery.

mod layout;
mod plugin;
mod spawning;
mod visuals;

pub use layout::*;
pub use plugin::{ArenaVisualsPlugin, WorldPlugin};
pub use spawning::{spawn_cover, Cover};
