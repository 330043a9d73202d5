//! Combat systems - hit resolution, damage application, death settling.

use bevy::prelude::*;
use bevy_rapier3d::prelude::RapierContext;

use super::health::{DamageOutcome, Health};
use super::hitscan::{resolve_shot, HitVolume, HitboxRegistry, ShotFired, VolumeScene};
use super::rapier_scene::RapierScene;
use crate::core::{ArenaSet, CombatTuning, DamageApplied, DamageEvent, DeathEvent};

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<HitboxRegistry>()

        // Events
        .add_event::<ShotFired>()

        // Hit resolution picks whichever scene is available
        .add_systems(
            Update,
            (
                resolve_shots_with_volumes.run_if(not(any_with_component::<RapierContext>)),
                resolve_shots_with_rapier.run_if(any_with_component::<RapierContext>),
            )
                .in_set(ArenaSet::Shoot),
        )

        // Damage systems
        .add_systems(
            Update,
            (apply_damage, settle_deaths)
                .chain()
                .in_set(ArenaSet::Damage),
        );
}

/// Resolve shots against [`HitVolume`]s (headless).
pub fn resolve_shots_with_volumes(
    mut shots: EventReader<ShotFired>,
    tuning: Res<CombatTuning>,
    registry: Res<HitboxRegistry>,
    volumes: Query<(Entity, &GlobalTransform, &HitVolume)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    if shots.is_empty() {
        return;
    }

    let scene = VolumeScene::new(
        volumes
            .iter()
            .map(|(entity, transform, volume)| (entity, transform.translation(), *volume)),
    );

    for event in shots.read() {
        send_shot_damage(
            resolve_shot(&scene, &registry, &event.shot, tuning.max_range),
            event,
            &tuning,
            &mut damage_events,
        );
    }
}

/// Resolve shots against Rapier colliders (windowed game).
pub fn resolve_shots_with_rapier(
    mut shots: EventReader<ShotFired>,
    tuning: Res<CombatTuning>,
    registry: Res<HitboxRegistry>,
    rapier_context: Query<&RapierContext>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    for event in shots.read() {
        let scene = RapierScene::new(context, Some(event.shooter));
        send_shot_damage(
            resolve_shot(&scene, &registry, &event.shot, tuning.max_range),
            event,
            &tuning,
            &mut damage_events,
        );
    }
}

fn send_shot_damage(
    target: Option<Entity>,
    event: &ShotFired,
    tuning: &CombatTuning,
    damage_events: &mut EventWriter<DamageEvent>,
) {
    match target {
        Some(target) => {
            debug!("Shot from {:?} struck {:?}", event.shooter, target);
            damage_events.send(DamageEvent {
                target,
                source: Some(event.shooter),
                amount: tuning.player_damage,
            });
        }
        None => debug!("Shot from {:?} hit nothing that bleeds", event.shooter),
    }
}

/// Apply damage events through the health model.
pub fn apply_damage(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<&mut Health>,
    mut applied_events: EventWriter<DamageApplied>,
) {
    let now = time.elapsed_secs_f64();

    for event in damage_events.read() {
        // Target may have been removed since the event was sent
        let Ok(mut health) = health_query.get_mut(event.target) else {
            continue;
        };

        match health.take_damage(event.amount, now, tuning.damage_debounce) {
            DamageOutcome::Applied { dealt, remaining } => {
                applied_events.send(DamageApplied {
                    target: event.target,
                    dealt,
                    remaining,
                });
            }
            DamageOutcome::Debounced => {
                debug!("Damage to {:?} debounced", event.target);
            }
            DamageOutcome::Ignored => {}
        }
    }
}

/// Report deaths once health has been zero for the settle delay.
pub fn settle_deaths(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut health_query: Query<(Entity, &mut Health)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    let now = time.elapsed_secs_f64();

    for (entity, mut health) in health_query.iter_mut() {
        if !health.is_depleted() || health.is_dead() {
            continue;
        }
        if health.settle_death(now, tuning.death_settle) {
            death_events.send(DeathEvent { entity });
        }
    }
}
