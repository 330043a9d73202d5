//! Player plugins - body spawning (core) and first-person controls (client).

use bevy::prelude::*;

use super::spawning::spawn_player;
use super::{input, movement};
use crate::core::GameState;

/// Player plugin - spawns the player body for each match.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_player);
    }
}

/// Player controls plugin - camera, movement and input intents.
pub struct PlayerControlsPlugin;

impl Plugin for PlayerControlsPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
        input::setup_input_systems(app);
    }
}
