//! Bot spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};
use rand::Rng;

use super::behavior::BotBrain;
use super::components::{Bot, BotHitbox, BotMuzzleFlash};
use crate::combat::{FireControl, Health, HitVolume, HitboxRegistry};
use crate::core::{CombatTuning, GameRng, MatchEntity};
use crate::world::ArenaLayout;

/// Torso hit volume, relative to the bot's feet.
pub const BODY_RADIUS: f32 = 0.45;
pub const BODY_HEIGHT: f32 = 0.9;
/// Head hit volume, relative to the bot's feet.
pub const HEAD_RADIUS: f32 = 0.2;
pub const HEAD_HEIGHT: f32 = 1.6;

/// Spawn one bot with its hitboxes and register them.
pub fn spawn_bot(
    commands: &mut Commands,
    registry: &mut HitboxRegistry,
    id: u32,
    position: Vec3,
    tuning: &CombatTuning,
    rng: &mut impl Rng,
) -> Entity {
    let bot = commands
        .spawn((
            Bot { id },
            BotBrain::new(position, tuning, rng),
            Health::new(tuning.max_health),
            FireControl::new(tuning.bot_cooldown),
            BotMuzzleFlash::default(),
            Transform::from_translation(position),
            RigidBody::KinematicPositionBased,
            MatchEntity,
        ))
        .id();

    let mut hitboxes = Vec::with_capacity(2);
    commands.entity(bot).with_children(|parent| {
        hitboxes.push(
            parent
                .spawn((
                    BotHitbox,
                    HitVolume::Sphere { radius: BODY_RADIUS },
                    Collider::ball(BODY_RADIUS),
                    Transform::from_xyz(0.0, BODY_HEIGHT, 0.0),
                ))
                .id(),
        );
        hitboxes.push(
            parent
                .spawn((
                    BotHitbox,
                    HitVolume::Sphere { radius: HEAD_RADIUS },
                    Collider::ball(HEAD_RADIUS),
                    Transform::from_xyz(0.0, HEAD_HEIGHT, 0.0),
                ))
                .id(),
        );
    });

    for hitbox in hitboxes {
        registry.register(hitbox, bot);
    }

    bot
}

/// Spawn the fixed roster from the arena layout.
pub fn spawn_roster(
    mut commands: Commands,
    layout: Res<ArenaLayout>,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<GameRng>,
    mut registry: ResMut<HitboxRegistry>,
) {
    registry.clear();

    for (index, position) in layout.bot_spawn_points().enumerate() {
        let bot = spawn_bot(
            &mut commands,
            &mut registry,
            index as u32 + 1,
            position,
            &tuning,
            &mut *rng,
        );
        debug!("Spawned bot {} ({:?}) at {}", index + 1, bot, position);
    }

    info!("Spawned {} bots", layout.bot_spawns.len());
}
