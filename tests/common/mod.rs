//! Shared helpers for headless match tests.

#![allow(dead_code)]

use bevy::prelude::*;
use bot_arena::bots::{Bot, BotBrain};
use bot_arena::combat::Health;
use bot_arena::core::{CombatTuning, FireIntent, GameState};
use bot_arena::create_headless_app;
use bot_arena::player::Player;
use bot_arena::session::Session;
use bot_arena::world::ArenaLayout;

pub const SEED: u64 = 42;

/// Frames per simulated second at the headless tick rate.
pub const FPS: u32 = 60;

/// Start a match on `layout` and let spawns and transforms settle.
pub fn start_match(layout: ArenaLayout) -> App {
    start_match_seeded(layout, SEED)
}

pub fn start_match_seeded(layout: ArenaLayout, seed: u64) -> App {
    start_match_tuned(layout, CombatTuning::default(), seed)
}

pub fn start_match_tuned(layout: ArenaLayout, tuning: CombatTuning, seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.insert_resource(layout).insert_resource(tuning);
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);

    // Enter Playing and spawn, then propagate hitbox transforms
    app.update();
    app.update();
    app
}

/// Advance simulated time by roughly `seconds`.
pub fn advance(app: &mut App, seconds: f32) {
    let frames = (seconds * FPS as f32).ceil() as u32;
    for _ in 0..frames {
        app.update();
    }
}

/// Queue a trigger pull and run one frame.
pub fn fire(app: &mut App, origin: Vec3, direction: Vec3) {
    app.world_mut().send_event(FireIntent { origin, direction });
    app.update();
}

pub fn bots(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query::<(Entity, &Bot)>();
    let mut bots: Vec<(Entity, u32)> = query
        .iter(app.world())
        .map(|(entity, bot)| (entity, bot.id))
        .collect();
    bots.sort_by_key(|(_, id)| *id);
    bots.into_iter().map(|(entity, _)| entity).collect()
}

pub fn player(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world())
}

pub fn health(app: &App, entity: Entity) -> u32 {
    app.world()
        .get::<Health>(entity)
        .map(Health::current)
        .expect("entity has no health")
}

pub fn brain(app: &App, bot: Entity) -> &BotBrain {
    app.world().get::<BotBrain>(bot).expect("bot has no brain")
}

pub fn position(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity has no transform")
        .translation
}

pub fn session(app: &App) -> &Session {
    app.world().resource::<Session>()
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}
