//! Core plugin that sets up game states, events, and shared resources.

use bevy::prelude::*;

use super::config::CombatTuning;
use super::events::*;
use super::pulse::{tick_hud_cues, HudCues};
use super::rng::GameRng;
use super::states::GameState;

/// Per-frame ordering of gameplay systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArenaSet {
    /// Refresh what bots know about the player
    Sense,
    /// Bot decisions, movement and trigger pulls
    Think,
    /// Player shots and hit resolution
    Shoot,
    /// Apply damage and settle deaths
    Damage,
    /// React to deaths (roster, kills, game over)
    Resolve,
    /// Cosmetic pulses
    Feedback,
}

/// Marker for everything that belongs to a single match.
///
/// Despawned when leaving `GameOver` so a restart starts from scratch.
#[derive(Component)]
pub struct MatchEntity;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Menu, Playing, GameOver)
/// - Global events (FireIntent, DamageEvent, DeathEvent, etc.)
/// - Tuning, RNG and HUD cue resources
/// - System set ordering for the frame
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            // Resources (anything inserted earlier wins)
            .init_resource::<CombatTuning>()
            .init_resource::<GameRng>()
            .init_resource::<HudCues>()

            // Global events
            .add_event::<FireIntent>()
            .add_event::<ReloadIntent>()
            .add_event::<DamageEvent>()
            .add_event::<DamageApplied>()
            .add_event::<DeathEvent>()
            .add_event::<GameOver>()

            .configure_sets(
                Update,
                (
                    ArenaSet::Sense,
                    ArenaSet::Think,
                    ArenaSet::Shoot,
                    ArenaSet::Damage,
                    ArenaSet::Resolve,
                    ArenaSet::Feedback,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, tick_hud_cues.in_set(ArenaSet::Feedback))
            .add_systems(OnExit(GameState::GameOver), cleanup_match);
    }
}

/// Despawn every entity of the finished match.
fn cleanup_match(mut commands: Commands, query: Query<Entity, With<MatchEntity>>) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    debug!("Cleaned up {} match entities", count);
}
