//! Player module - player body, first-person camera and input.

mod components;
mod input;
mod movement;
mod plugin;
mod spawning;

pub use components::*;
pub use plugin::{PlayerControlsPlugin, PlayerPlugin};
pub use spawning::spawn_player;
