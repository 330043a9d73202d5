//! Bot AI systems - behavior ticks and firing.

use bevy::prelude::*;

use super::behavior::{horizontal_distance, BotBrain};
use super::components::{Bot, BotFired, BotMuzzleFlash};
use crate::combat::{roll_bot_shot, Accuracy, BotShot, FireControl, Health};
use crate::core::{CombatTuning, DamageEvent, GameRng};
use crate::player::Player;
use crate::session::PlayerSnapshot;
use crate::world::ArenaLayout;

/// Run every live bot's state machine and move it.
///
/// Bots read the polled [`PlayerSnapshot`], never the live player transform.
pub fn bot_think(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    layout: Res<ArenaLayout>,
    snapshot: Res<PlayerSnapshot>,
    mut rng: ResMut<GameRng>,
    mut bots: Query<(&mut Transform, &mut BotBrain, &Health), With<Bot>>,
) {
    let delta = time.delta_secs();
    let elapsed = time.elapsed_secs();
    let player = snapshot.position;

    for (mut transform, mut brain, health) in bots.iter_mut() {
        // Dying bots stand still until they are removed
        if health.is_depleted() {
            continue;
        }

        brain.think(transform.translation, player, delta, &tuning, &mut *rng);
        transform.translation =
            brain.advance(transform.translation, delta, elapsed, layout.half_extent, &tuning);
        transform.rotation = brain.rotation();
    }
}

/// Advance fire cadence and take shots at the player.
pub fn bot_fire(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    snapshot: Res<PlayerSnapshot>,
    mut rng: ResMut<GameRng>,
    mut bots: Query<
        (
            Entity,
            &Transform,
            &mut BotBrain,
            &mut FireControl,
            &mut BotMuzzleFlash,
            &Health,
        ),
        With<Bot>,
    >,
    player_query: Query<Entity, With<Player>>,
    mut fired_events: EventWriter<BotFired>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    let now = time.elapsed_secs_f64();
    let delta = time.delta_secs();
    let accuracy = Accuracy::from_tuning(&tuning);

    for (entity, transform, mut brain, mut fire_control, mut flash, health) in bots.iter_mut() {
        if health.is_depleted() {
            continue;
        }

        if !brain.tick_trigger(delta, &tuning, &mut *rng) {
            continue;
        }

        if !fire_control.try_fire(now) {
            debug!("Bot {:?} held fire, still cooling down", entity);
            continue;
        }

        flash.0.trigger(tuning.muzzle_flash);

        let distance = horizontal_distance(transform.translation, snapshot.position);
        let shot = roll_bot_shot(&accuracy, &tuning.bot_damage, distance, &mut *rng);

        if let BotShot::Hit { damage } = shot {
            damage_events.send(DamageEvent {
                target: player,
                source: Some(entity),
                amount: damage as f32,
            });
        }

        debug!("Bot {:?} fired at {:.1}m: {:?}", entity, distance, shot);
        fired_events.send(BotFired { bot: entity, shot });
    }
}

/// Tick bot muzzle flashes.
pub fn tick_bot_flashes(time: Res<Time>, mut flashes: Query<&mut BotMuzzleFlash>) {
    let delta = time.delta_secs();
    for mut flash in flashes.iter_mut() {
        flash.0.tick(delta);
    }
}
