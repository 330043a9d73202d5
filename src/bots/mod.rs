//! Bots module - bot entities, behavior state machine and spawning.

mod ai;
mod behavior;
mod components;
mod plugin;
mod spawning;

pub use behavior::*;
pub use components::*;
pub use plugin::BotPlugin;
pub use spawning::{spawn_bot, BODY_HEIGHT, BODY_RADIUS, HEAD_HEIGHT, HEAD_RADIUS};
