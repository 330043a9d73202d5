//! Match lifecycle: game over, restart and determinism.

mod common;

use bevy::prelude::*;
use bot_arena::bots::BODY_HEIGHT;
use bot_arena::combat::HitboxRegistry;
use bot_arena::core::{DamageEvent, DeathEvent, GameOver, GameState, MatchEntity};
use bot_arena::world::ArenaLayout;

use common::*;

const PLAYER_EYE: Vec3 = Vec3::new(0.0, 1.7, 0.0);
const MUZZLE: Vec3 = Vec3::new(0.0, BODY_HEIGHT, 0.0);

#[derive(Resource, Default)]
struct Reports(Vec<u32>);

fn record_game_over(mut events: EventReader<GameOver>, mut reports: ResMut<Reports>) {
    reports.0.extend(events.read().map(|event| event.kills));
}

fn kill_player(app: &mut App) {
    let player = player(app);
    app.world_mut().send_event(DamageEvent {
        target: player,
        source: None,
        amount: 1000.0,
    });
    advance(app, 0.3);
}

#[test]
fn player_death_ends_the_match_with_kill_count() {
    let mut app = start_match(ArenaLayout::open(
        PLAYER_EYE,
        [Vec3::new(0.0, 0.0, -20.0), Vec3::new(25.0, 0.0, 25.0)],
    ));
    app.init_resource::<Reports>()
        .add_systems(Update, record_game_over);

    for _ in 0..3 {
        fire(&mut app, MUZZLE, Vec3::NEG_Z);
        advance(&mut app, 0.2);
    }
    assert_eq!(session(&app).kills(), 1);

    kill_player(&mut app);

    assert_eq!(state(&app), GameState::GameOver);
    assert!(session(&app).is_over());
    assert_eq!(app.world().resource::<Reports>().0, vec![1]);

    // Terminal: trigger pulls and time change nothing
    let ammo = session(&app).ammo();
    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    advance(&mut app, 1.0);
    assert_eq!(session(&app).ammo(), ammo);
    assert_eq!(app.world().resource::<Reports>().0, vec![1]);
}

#[test]
fn kill_settling_with_the_player_still_counts() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]));
    app.init_resource::<Reports>()
        .add_systems(Update, record_game_over);
    let bot = bots(&mut app)[0];
    let player = player(&mut app);

    // Player's death queued ahead of the bot's in the same frame
    app.world_mut().send_event(DeathEvent { entity: player });
    app.world_mut().send_event(DeathEvent { entity: bot });
    app.update();
    app.update();

    assert_eq!(session(&app).kills(), 1);
    assert!(bots(&mut app).is_empty());
    assert_eq!(app.world().resource::<Reports>().0, vec![1]);
    assert_eq!(state(&app), GameState::GameOver);
}

#[test]
fn bots_stop_once_the_player_is_down() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -5.0)]));
    let bot = bots(&mut app)[0];

    kill_player(&mut app);
    let frozen = brain(&app, bot).clone();
    advance(&mut app, 2.0);

    assert_eq!(brain(&app, bot).target, frozen.target);
    assert_eq!(brain(&app, bot).shoot_timer, frozen.shoot_timer);
}

#[test]
fn restart_starts_a_clean_session() {
    let mut app = start_match(ArenaLayout::default());
    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    kill_player(&mut app);
    assert_eq!(state(&app), GameState::GameOver);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(session(&app).ammo(), 30);
    assert_eq!(session(&app).kills(), 0);
    assert!(!session(&app).is_over());
    assert_eq!(bots(&mut app).len(), 8);
    let player_entity = player(&mut app);
    assert_eq!(health(&app, player_entity), 100);

    // One player, eight bots, six cover blocks
    let mut matched = app.world_mut().query_filtered::<(), With<MatchEntity>>();
    assert_eq!(matched.iter(app.world()).count(), 1 + 8 + 6);
    assert_eq!(app.world().resource::<HitboxRegistry>().len(), 16);
}

fn run_match(seed: u64) -> (Vec<Vec3>, u32) {
    let mut app = start_match_seeded(ArenaLayout::default(), seed);
    advance(&mut app, 8.0);

    let roster = bots(&mut app);
    let positions = roster.iter().map(|bot| position(&app, *bot)).collect();
    let player = player(&mut app);
    (positions, health(&app, player))
}

#[test]
fn same_seed_plays_out_identically() {
    let first = run_match(7);
    let second = run_match(7);
    assert_eq!(first, second);
}
