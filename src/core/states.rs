//! Game state definitions that control the overall flow of a match.
//!
//! States determine which systems run at any given time. Bot AI, shooting
//! and damage only run while `Playing`; the menu and game-over screens are
//! handled by the UI.

use bevy::prelude::*;

/// Main game states - controls overall match flow.
///
/// - Start in `Menu` until the player asks to play
/// - `Playing` creates a fresh session (player, bots, counters)
/// - `GameOver` once the player's death has settled
/// - Leaving `GameOver` tears the old session down for a restart
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title / start screen
    #[default]
    Menu,
    /// Active match
    Playing,
    /// Player has died, final score is on screen
    GameOver,
}
