//! Bot Arena - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Left mouse: Fire
//! - Right mouse: Scope
//! - R: Reload
//! - Enter: Start / restart

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use bot_arena::core::GameRng;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bot Arena".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics (character controller and hit queries)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        .insert_resource(GameRng::from_entropy())

        .add_plugins(bot_arena::ArenaPlugin)
        .add_plugins(bot_arena::ClientPlugin)

        .run();
}
