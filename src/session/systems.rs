//! Session systems - wiring shots, reloads and deaths between the models.

use bevy::prelude::*;

use super::resources::{PlayerSnapshot, Session, SnapshotTimer};
use crate::bots::Bot;
use crate::combat::{
    resolve_shots_with_rapier, resolve_shots_with_volumes, FireControl, Health, HitboxRegistry,
    Shot, ShotFired,
};
use crate::core::{
    ArenaSet, CombatTuning, DamageApplied, DeathEvent, FireIntent, GameOver, GameState, HudCues,
    ReloadIntent,
};
use crate::player::Player;
use crate::world::ArenaLayout;

/// Configure session systems.
pub fn setup_session_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<Session>()
        .init_resource::<PlayerSnapshot>()
        .init_resource::<SnapshotTimer>()

        // Nothing senses, thinks or shoots once the player is down
        .configure_sets(
            Update,
            (ArenaSet::Sense, ArenaSet::Think, ArenaSet::Shoot).run_if(match_live),
        )

        .add_systems(OnEnter(GameState::Playing), start_session)
        .add_systems(Update, poll_player_snapshot.in_set(ArenaSet::Sense))
        .add_systems(
            Update,
            (handle_reload, handle_fire_intents)
                .chain()
                .in_set(ArenaSet::Shoot)
                .before(resolve_shots_with_volumes)
                .before(resolve_shots_with_rapier),
        )
        .add_systems(
            Update,
            (flash_on_player_damage, handle_deaths).in_set(ArenaSet::Resolve),
        );
}

/// Run condition: the match is still being played out.
pub fn match_live(session: Res<Session>, player: Query<&Health, With<Player>>) -> bool {
    !session.is_over() && player.iter().all(|health| !health.is_depleted())
}

/// Reset counters and the player snapshot for a new match.
pub fn start_session(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    layout: Res<ArenaLayout>,
    mut cues: ResMut<HudCues>,
) {
    commands.insert_resource(Session::new(tuning.max_ammo));
    commands.insert_resource(PlayerSnapshot {
        position: layout.player_start(),
    });
    commands.insert_resource(SnapshotTimer::new(tuning.snapshot_interval));
    *cues = HudCues::default();

    info!("Match started with {} rounds", tuning.max_ammo);
}

/// Republish the player position at the poll cadence.
pub fn poll_player_snapshot(
    time: Res<Time>,
    mut timer: ResMut<SnapshotTimer>,
    mut snapshot: ResMut<PlayerSnapshot>,
    player_query: Query<&Transform, With<Player>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let Ok(transform) = player_query.get_single() else {
        return;
    };
    snapshot.position = transform.translation;
}

/// Turn fire intents into accepted shots.
///
/// A shot needs a usable direction, a free fire-control window and a round.
/// Anything else is dropped silently and never reaches the ray cast.
pub fn handle_fire_intents(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut intents: EventReader<FireIntent>,
    mut session: ResMut<Session>,
    mut cues: ResMut<HudCues>,
    mut player_query: Query<(Entity, &mut FireControl), With<Player>>,
    mut shots: EventWriter<ShotFired>,
) {
    let Ok((player, mut fire_control)) = player_query.get_single_mut() else {
        intents.clear();
        return;
    };
    let now = time.elapsed_secs_f64();

    for intent in intents.read() {
        let Some(shot) = Shot::new(intent.origin, intent.direction) else {
            debug!("Dropped shot with degenerate aim {:?}", intent.direction);
            continue;
        };

        if !fire_control.can_fire(now) {
            continue;
        }

        if !session.consume_round() {
            debug!("Click. Magazine empty");
            continue;
        }

        fire_control.try_fire(now);
        cues.muzzle_flash.trigger(tuning.muzzle_flash);
        shots.send(ShotFired {
            shooter: player,
            shot,
        });
    }
}

pub fn handle_reload(mut intents: EventReader<ReloadIntent>, mut session: ResMut<Session>) {
    if intents.read().count() > 0 {
        session.reload();
        debug!("Reloaded to {}", session.ammo());
    }
}

/// Flash the screen whenever the player loses health.
pub fn flash_on_player_damage(
    tuning: Res<CombatTuning>,
    mut applied: EventReader<DamageApplied>,
    mut cues: ResMut<HudCues>,
    player_query: Query<(), With<Player>>,
) {
    for event in applied.read() {
        if event.dealt > 0 && player_query.contains(event.target) {
            cues.damage_flash.trigger(tuning.damage_flash);
        }
    }
}

/// Remove dead bots from the roster and end the match when the player dies.
///
/// Bot deaths are booked before the player's, so a kill that settles in the
/// same frame as the player's death still counts.
pub fn handle_deaths(
    mut commands: Commands,
    mut deaths: EventReader<DeathEvent>,
    mut session: ResMut<Session>,
    mut registry: ResMut<HitboxRegistry>,
    bot_query: Query<&Bot>,
    player_query: Query<(), With<Player>>,
    mut game_over: EventWriter<GameOver>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut player_died = false;

    for event in deaths.read() {
        if let Ok(bot) = bot_query.get(event.entity) {
            registry.forget_owner(event.entity);
            commands.entity(event.entity).despawn_recursive();
            session.record_kill();
            info!("Bot {} down, {} kills", bot.id, session.kills());
        } else if player_query.contains(event.entity) {
            player_died = true;
        }
    }

    if !player_died || session.is_over() {
        return;
    }

    let kills = session.finish();
    info!("Player killed. Game over with {} kills", kills);
    game_over.send(GameOver { kills });
    next_state.set(GameState::GameOver);
}
