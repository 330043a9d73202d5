//! Bot Arena - a first-person arena shooter against AI bots, in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, tuning, RNG, frame ordering
//! - **Combat**: Health, fire control, hitscan resolution, damage
//! - **Bots**: Behavior state machine, movement, firing, roster spawning
//! - **Player**: Player body, first-person camera and input intents
//! - **Session**: Ammo, kills, player position polling, game over
//! - **World**: Arena layout, cover, scenery
//! - **UI**: Menus and HUD
//!
//! [`ArenaPlugin`] holds everything that decides what happens in a match and
//! runs without a window. [`ClientPlugin`] adds the parts a human needs to
//! see and play it.

pub mod bots;
pub mod combat;
pub mod core;
pub mod player;
pub mod session;
pub mod ui;
pub mod world;

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::core::{CombatTuning, GameRng, TUNING_PATH};
use crate::world::{ArenaLayout, LAYOUT_PATH};

/// Fixed frame length used by headless apps.
pub const HEADLESS_TICK: Duration = Duration::from_micros(16_667);

/// Gameplay plugin - every system that decides what happens in a match.
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            .add_plugins(combat::CombatPlugin)
            .add_plugins(bots::BotPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(session::SessionPlugin)
            .add_plugins(world::WorldPlugin);
    }
}

/// Presentation plugin - window-side input, meshes and UI.
pub struct ClientPlugin;

impl Plugin for ClientPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_game_data)
            .add_plugins(player::PlayerControlsPlugin)
            .add_plugins(world::ArenaVisualsPlugin)
            .add_plugins(ui::UiPlugin);
    }
}

/// Replace compiled-in tuning and layout with the data files, if present.
fn load_game_data(mut commands: Commands) {
    match CombatTuning::load(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded combat tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning);
        }
        Err(e) => warn!("Using default combat tuning: {}", e),
    }

    match ArenaLayout::load(Path::new(LAYOUT_PATH)) {
        Ok(layout) => {
            info!(
                "Loaded arena layout from {} ({} bots, {} cover blocks)",
                LAYOUT_PATH,
                layout.bot_spawns.len(),
                layout.cover.len()
            );
            commands.insert_resource(layout);
        }
        Err(e) => warn!("Using default arena layout: {}", e),
    }
}

/// Build a windowless app running the full match logic.
///
/// Time advances by [`HEADLESS_TICK`] per `update()` and every random draw
/// comes from `seed`, so two apps built with the same seed and fed the same
/// inputs play out identically.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        HierarchyPlugin,
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_TICK))
    .insert_resource(GameRng::new(seed))
    .add_plugins(ArenaPlugin);
    app
}
