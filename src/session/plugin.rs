//! Session plugin - the match coordinator.

use bevy::prelude::*;

use super::systems;

/// Session plugin - owns ammo, kills, the player snapshot and game over.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_session_systems(app);
    }
}
