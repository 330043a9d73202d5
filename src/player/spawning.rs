//! Player body spawning.

use bevy::prelude::*;

use super::components::{AimState, Player};
use crate::combat::{FireControl, Health};
use crate::core::{CombatTuning, MatchEntity};
use crate::world::ArenaLayout;

/// Spawn the player body at the layout's start point.
///
/// Only the combat state lives here. The windowed client attaches the
/// character controller and camera when it sees a new [`Player`].
pub fn spawn_player(mut commands: Commands, layout: Res<ArenaLayout>, tuning: Res<CombatTuning>) {
    let start = layout.player_start();

    let player = commands
        .spawn((
            Player,
            AimState::default(),
            Health::new(tuning.max_health),
            FireControl::new(tuning.player_fire_interval),
            Transform::from_translation(start),
            MatchEntity,
        ))
        .id();

    debug!("Spawned player {:?} at {}", player, start);
}
