//! Combat plugin - health, hitscan and damage.

use bevy::prelude::*;

use super::systems;

/// Combat plugin - handles hit resolution and the damage pipeline.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_combat_systems(app);
    }
}
