//! Mouse and keyboard → core intents.

use bevy::prelude::*;

use super::components::{AimState, Player, PlayerCamera};
use crate::core::{ArenaSet, FireIntent, GameState, ReloadIntent};

/// Set up input systems. They only emit intents; the core decides.
pub fn setup_input_systems(app: &mut App) {
    app.add_systems(
        Update,
        (scope_input, fire_input, reload_input)
            .run_if(in_state(GameState::Playing))
            .before(ArenaSet::Sense),
    );
}

/// Held left mouse sends an intent every frame; fire control throttles it.
fn fire_input(
    mouse: Res<ButtonInput<MouseButton>>,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    mut fire_events: EventWriter<FireIntent>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    let Ok(camera) = camera_query.get_single() else {
        return;
    };

    fire_events.send(FireIntent {
        origin: camera.translation(),
        direction: camera.forward().as_vec3(),
    });
}

fn reload_input(keyboard: Res<ButtonInput<KeyCode>>, mut reload_events: EventWriter<ReloadIntent>) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        reload_events.send(ReloadIntent);
    }
}

fn scope_input(mouse: Res<ButtonInput<MouseButton>>, mut query: Query<&mut AimState, With<Player>>) {
    let scoped = mouse.pressed(MouseButton::Right);
    for mut aim in query.iter_mut() {
        // Avoid tripping change detection every frame
        aim.set_if_neq(AimState { scoped });
    }
}
