//! Global events used for cross-system communication.
//!
//! The input layer talks to the core only through intents, and the core
//! reports back to the UI through events. Damage and death travel as events
//! too, so the health model never has to know who is listening.

use bevy::prelude::*;

/// The player pulled the trigger.
///
/// Sent by the input layer once per attempted shot. The core decides whether
/// the shot is accepted (rate limit, ammo, valid direction).
#[derive(Event, Debug, Clone, Copy)]
pub struct FireIntent {
    /// Aim origin (camera position)
    pub origin: Vec3,
    /// Aim direction, need not be normalized
    pub direction: Vec3,
}

/// The player asked for a reload. Not rate limited.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ReloadIntent;

/// Sent when a combatant should take damage.
///
/// The damage system applies it through [`Health::take_damage`], which may
/// reject it (dead target, debounce window, invalid amount).
///
/// [`Health::take_damage`]: crate::combat::Health::take_damage
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage (if any)
    pub source: Option<Entity>,
    /// Damage amount; non-positive or NaN amounts are ignored
    pub amount: f32,
}

/// Sent after damage was actually applied to a combatant.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageApplied {
    pub target: Entity,
    pub dealt: u32,
    pub remaining: u32,
}

/// Sent exactly once when a combatant's death has settled.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
}

/// Terminal report for the UI: the match is over.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    /// Bots killed during the session
    pub kills: u32,
}
