//! Combat module - health, fire control, hitscan and damage.

mod fire_control;
mod health;
mod hitscan;
mod plugin;
mod rapier_scene;
mod systems;

pub use fire_control::*;
pub use health::*;
pub use hitscan::*;
pub use plugin::CombatPlugin;
pub use rapier_scene::RapierScene;
pub use systems::{resolve_shots_with_rapier, resolve_shots_with_volumes};
