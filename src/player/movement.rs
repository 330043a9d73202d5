//! First-person movement and camera control (windowed client only).

use bevy::input::mouse::MouseMotion;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use bevy::prelude::*;

use super::components::*;
use crate::core::{ArenaSet, GameState};
use crate::world::ArenaLayout;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<PlayerConfig>()
        .add_systems(OnEnter(GameState::Playing), grab_cursor)
        .add_systems(OnExit(GameState::Playing), release_cursor)
        .add_systems(Update, attach_player_rig)
        .add_systems(
            Update,
            (mouse_look, player_movement, apply_scope_zoom)
                .run_if(in_state(GameState::Playing))
                .before(ArenaSet::Sense),
        );
}

/// Grab and hide cursor when a match starts.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when the match ends.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Give a freshly spawned player body a character controller and camera.
pub fn attach_player_rig(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    query: Query<Entity, Added<Player>>,
) {
    for player in query.iter() {
        commands
            .entity(player)
            .insert((
                Visibility::default(),
                RigidBody::KinematicPositionBased,
                Collider::capsule_y(0.5, 0.3),
                KinematicCharacterController {
                    offset: CharacterLength::Absolute(0.01),
                    ..default()
                },
            ))
            .with_children(|parent| {
                parent.spawn((
                    Camera3d::default(),
                    Projection::Perspective(PerspectiveProjection {
                        fov: config.fov,
                        ..default()
                    }),
                    PlayerCamera::default(),
                    Transform::default(),
                ));
            });
    }
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera vertically (pitch).
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    player_transform.rotate_y(-delta.x * sensitivity);

    // Clamped to prevent flipping
    camera.pitch -= delta.y * sensitivity * y_invert;
    camera.pitch = camera.pitch.clamp(-1.4, 1.4);

    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// WASD movement through the character controller, kept inside the arena.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    layout: Res<ArenaLayout>,
    mut player_query: Query<
        (&Transform, &AimState, &mut KinematicCharacterController),
        With<Player>,
    >,
) {
    let Ok((transform, aim, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return;
    }

    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let movement = Quat::from_rotation_y(yaw) * direction;
    let step = movement * config.speed(aim.scoped) * time.delta_secs();

    let target = layout.clamp(transform.translation + step);
    controller.translation = Some(target - transform.translation);
}

/// Ease the field of view toward the scoped or unscoped target.
fn apply_scope_zoom(
    time: Res<Time>,
    config: Res<PlayerConfig>,
    player_query: Query<&AimState, With<Player>>,
    mut camera_query: Query<&mut Projection, With<PlayerCamera>>,
) {
    let Ok(aim) = player_query.get_single() else {
        return;
    };
    let delta = time.delta_secs();

    for mut projection in camera_query.iter_mut() {
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.fov = config.ease_fov(perspective.fov, aim.scoped, delta);
        }
    }
}
