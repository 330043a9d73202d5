//! End-to-end combat scenarios on a headless match.

mod common;

use bevy::prelude::*;
use bot_arena::bots::{horizontal_distance, BotState, BODY_HEIGHT};
use bot_arena::combat::{FireControl, Health, HitboxRegistry};
use bot_arena::core::HudCues;
use bot_arena::session::Session;
use bot_arena::world::{ArenaLayout, Cover, CoverBlock};

use common::*;

const PLAYER_EYE: Vec3 = Vec3::new(0.0, 1.7, 0.0);

/// Chest height at the origin, looking down -Z.
const MUZZLE: Vec3 = Vec3::new(0.0, BODY_HEIGHT, 0.0);

#[test]
fn distant_bot_keeps_patrolling_and_never_fires() {
    let player_start = Vec3::new(-20.0, 1.7, -20.0);
    let mut app = start_match(ArenaLayout::open(player_start, [Vec3::new(30.0, 0.0, -20.0)]));
    let bot = bots(&mut app)[0];
    let player = player(&mut app);

    for _ in 0..10 * FPS {
        app.update();
        assert_eq!(brain(&app, bot).state, BotState::Patrol);
        assert!(!brain(&app, bot).is_aiming);
    }

    let fire_control = app.world().get::<FireControl>(bot).unwrap();
    assert_eq!(fire_control.last_shot_at(), None);
    assert_eq!(health(&app, player), 100);
    assert!(horizontal_distance(position(&app, bot), player_start) >= 40.0);
}

#[test]
fn close_bot_retreats_from_player() {
    let start = Vec3::new(0.0, 0.0, -5.0);
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [start]));
    let bot = bots(&mut app)[0];

    assert_eq!(brain(&app, bot).state, BotState::Retreat);
    let initial = horizontal_distance(start, PLAYER_EYE);
    assert!(horizontal_distance(brain(&app, bot).target, PLAYER_EYE) > initial);

    advance(&mut app, 5.0);

    assert!(horizontal_distance(position(&app, bot), PLAYER_EYE) > initial);
    assert!(horizontal_distance(brain(&app, bot).target, PLAYER_EYE) > initial);
}

#[test]
fn point_blank_shot_with_last_round() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -3.0)]));
    let bot = bots(&mut app)[0];
    app.world_mut().resource_mut::<Session>().set_ammo(1);

    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    assert_eq!(session(&app).ammo(), 0);
    assert_eq!(health(&app, bot), 65);
    assert!(!app.world().get::<Health>(bot).unwrap().is_depleted());

    // Wait out the trigger interval so only the empty magazine can refuse
    advance(&mut app, 0.5);
    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    assert_eq!(session(&app).ammo(), 0);
    assert_eq!(health(&app, bot), 65);
}

#[test]
fn muzzle_flash_only_on_accepted_shots() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]));
    let muzzle_flash = |app: &App| app.world().resource::<HudCues>().muzzle_flash;

    fire(&mut app, PLAYER_EYE, Vec3::Z);
    assert_eq!(session(&app).ammo(), 29);
    let first = muzzle_flash(&app);
    assert!(first.is_active());

    // Inside the trigger interval: refused, and the pulse keeps running down
    fire(&mut app, PLAYER_EYE, Vec3::Z);
    assert_eq!(session(&app).ammo(), 29);
    assert!(muzzle_flash(&app).remaining() < first.remaining());

    advance(&mut app, 0.2);
    assert!(!muzzle_flash(&app).is_active());

    app.world_mut().resource_mut::<Session>().set_ammo(0);
    fire(&mut app, PLAYER_EYE, Vec3::Z);
    assert!(!muzzle_flash(&app).is_active());
}

#[test]
fn degenerate_aim_costs_nothing() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]));
    let bot = bots(&mut app)[0];

    fire(&mut app, MUZZLE, Vec3::ZERO);
    assert_eq!(session(&app).ammo(), 30);
    assert_eq!(health(&app, bot), 100);
}

#[test]
fn cover_absorbs_the_shot() {
    let mut layout = ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]);
    layout.cover.push(CoverBlock::new(
        Vec3::new(0.0, 1.0, -10.0),
        Vec3::new(2.0, 1.0, 0.2),
    ));
    let mut app = start_match(layout);
    let bot = bots(&mut app)[0];

    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    assert_eq!(session(&app).ammo(), 29);
    assert_eq!(health(&app, bot), 100);

    // Same shot lands once the wall is gone
    let mut covers = app.world_mut().query_filtered::<Entity, With<Cover>>();
    let walls: Vec<Entity> = covers.iter(app.world()).collect();
    for wall in walls {
        app.world_mut().despawn(wall);
    }
    advance(&mut app, 0.2);

    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    assert_eq!(health(&app, bot), 65);
}

#[test]
fn only_the_nearest_bot_in_line_is_hit() {
    let mut app = start_match(ArenaLayout::open(
        PLAYER_EYE,
        [Vec3::new(0.0, 0.0, -18.0), Vec3::new(0.0, 0.0, -25.0)],
    ));
    let roster = bots(&mut app);
    let (near, far) = (roster[0], roster[1]);

    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    assert_eq!(health(&app, near), 65);
    assert_eq!(health(&app, far), 100);
}

#[test]
fn empty_air_hits_nobody() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]));
    let bot = bots(&mut app)[0];

    fire(&mut app, MUZZLE, Vec3::Z);
    assert_eq!(session(&app).ammo(), 29);
    assert_eq!(health(&app, bot), 100);
}

#[test]
fn three_hits_kill_a_bot_exactly_once() {
    let mut app = start_match(ArenaLayout::open(PLAYER_EYE, [Vec3::new(0.0, 0.0, -20.0)]));
    let bot = bots(&mut app)[0];

    for _ in 0..3 {
        fire(&mut app, MUZZLE, Vec3::NEG_Z);
        advance(&mut app, 0.2);
    }

    assert_eq!(session(&app).kills(), 1);
    assert!(!app.world().entities().contains(bot));
    assert!(app.world().resource::<HitboxRegistry>().is_empty());

    // Nothing left to hit, the kill count stays put
    fire(&mut app, MUZZLE, Vec3::NEG_Z);
    advance(&mut app, 0.5);
    assert_eq!(session(&app).kills(), 1);
}
