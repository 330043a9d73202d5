//! Bot plugin - registers roster spawning and AI systems.

use bevy::prelude::*;

use super::ai;
use super::components::BotFired;
use super::spawning::spawn_roster;
use crate::core::{ArenaSet, GameState};

/// Bot plugin - handles bot spawning, behavior and firing.
pub struct BotPlugin;

impl Plugin for BotPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<BotFired>()
            .add_systems(OnEnter(GameState::Playing), spawn_roster)
            .add_systems(
                Update,
                (ai::bot_think, ai::bot_fire)
                    .chain()
                    .in_set(ArenaSet::Think),
            )
            .add_systems(Update, ai::tick_bot_flashes.in_set(ArenaSet::Feedback));
    }
}
