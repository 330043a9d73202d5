//! World plugins - arena layout, static geometry and scenery.

use bevy::prelude::*;

use super::layout::ArenaLayout;
use super::spawning::spawn_cover;
use super::visuals;
use crate::core::GameState;

/// World plugin - spawns arena cover for each match.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaLayout>()
            .add_systems(OnEnter(GameState::Playing), spawn_cover);
    }
}

/// Arena visuals plugin - meshes and lights for the windowed game.
pub struct ArenaVisualsPlugin;

impl Plugin for ArenaVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, visuals::spawn_environment)
            .add_systems(
                Update,
                (
                    visuals::attach_cover_visuals,
                    visuals::attach_bot_visuals,
                    visuals::sync_bot_muzzle_lights,
                ),
            );
    }
}
