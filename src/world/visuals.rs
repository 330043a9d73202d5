//! Meshes and lights for the windowed game.
//!
//! Purely cosmetic: attaches geometry to entities the core already spawned.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::spawning::Cover;
use crate::bots::{Bot, BotMuzzleFlash, BODY_HEIGHT, BODY_RADIUS, HEAD_HEIGHT, HEAD_RADIUS};

/// Shared handles for arena materials.
#[derive(Resource)]
pub struct ArenaMaterials {
    pub ground: Handle<StandardMaterial>,
    pub crate_wood: Handle<StandardMaterial>,
    pub bot_body: Handle<StandardMaterial>,
    pub bot_head: Handle<StandardMaterial>,
    pub bot_eyes: Handle<StandardMaterial>,
}

impl ArenaMaterials {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            ground: materials.add(StandardMaterial {
                base_color: Color::srgb(0.24, 0.27, 0.2),
                perceptual_roughness: 0.95,
                ..default()
            }),
            crate_wood: materials.add(StandardMaterial {
                base_color: Color::srgb(0.45, 0.33, 0.2),
                perceptual_roughness: 0.8,
                ..default()
            }),
            bot_body: materials.add(StandardMaterial {
                base_color: Color::srgb(0.55, 0.0, 0.0),
                metallic: 0.3,
                perceptual_roughness: 0.7,
                ..default()
            }),
            bot_head: materials.add(StandardMaterial {
                base_color: Color::srgb(0.4, 0.26, 0.13),
                perceptual_roughness: 0.8,
                ..default()
            }),
            bot_eyes: materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.0, 0.0),
                emissive: LinearRgba::rgb(4.0, 0.0, 0.0),
                ..default()
            }),
        }
    }
}

/// Marker for a bot's muzzle light.
#[derive(Component)]
pub struct BotMuzzleLight;

/// Ground, sky light and sun. Spawned once at startup, outlives matches.
pub fn spawn_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let arena_materials = ArenaMaterials::new(&mut materials);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(200.0, 0.2, 200.0))),
        MeshMaterial3d(arena_materials.ground.clone()),
        Transform::from_xyz(0.0, -0.1, 0.0),
        Collider::cuboid(100.0, 0.1, 100.0),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(arena_materials);
}

/// Give freshly spawned cover a crate mesh.
pub fn attach_cover_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    arena_materials: Res<ArenaMaterials>,
    query: Query<(Entity, &Cover), Added<Cover>>,
) {
    for (entity, cover) in query.iter() {
        let size = cover.half_extents * 2.0;
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(arena_materials.crate_wood.clone()),
        ));
    }
}

/// Give freshly spawned bots a body, head, eyes and muzzle light.
pub fn attach_bot_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    arena_materials: Res<ArenaMaterials>,
    query: Query<Entity, Added<Bot>>,
) {
    for entity in query.iter() {
        let body = meshes.add(Capsule3d::new(BODY_RADIUS * 0.7, BODY_HEIGHT * 0.9));
        let head = meshes.add(Sphere::new(HEAD_RADIUS));
        let eye = meshes.add(Sphere::new(0.04));

        commands
            .entity(entity)
            .insert(Visibility::default())
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(body),
                    MeshMaterial3d(arena_materials.bot_body.clone()),
                    Transform::from_xyz(0.0, BODY_HEIGHT, 0.0),
                ));
                parent.spawn((
                    Mesh3d(head),
                    MeshMaterial3d(arena_materials.bot_head.clone()),
                    Transform::from_xyz(0.0, HEAD_HEIGHT, 0.0),
                ));
                for x in [-0.08, 0.08] {
                    parent.spawn((
                        Mesh3d(eye.clone()),
                        MeshMaterial3d(arena_materials.bot_eyes.clone()),
                        Transform::from_xyz(x, HEAD_HEIGHT + 0.05, 0.15),
                    ));
                }
                parent.spawn((
                    BotMuzzleLight,
                    PointLight {
                        color: Color::srgb(1.0, 0.67, 0.0),
                        intensity: 0.0,
                        range: 10.0,
                        ..default()
                    },
                    Transform::from_xyz(0.3, BODY_HEIGHT + 0.2, 0.5),
                ));
            });
    }
}

/// Light up a bot's muzzle while its flash pulse is active.
pub fn sync_bot_muzzle_lights(
    bots: Query<(&BotMuzzleFlash, &Children)>,
    mut lights: Query<&mut PointLight, With<BotMuzzleLight>>,
) {
    for (flash, children) in bots.iter() {
        for &child in children.iter() {
            if let Ok(mut light) = lights.get_mut(child) {
                light.intensity = if flash.0.is_active() { 50_000.0 } else { 0.0 };
            }
        }
    }
}
