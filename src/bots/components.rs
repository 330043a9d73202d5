//! Bot-related components and events.

use bevy::prelude::*;

use crate::combat::BotShot;
use crate::core::FlashPulse;

/// Marker component for all bots, with a stable roster id.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bot {
    pub id: u32,
}

/// Marker for the hit volumes attached to a bot.
#[derive(Component)]
pub struct BotHitbox;

/// Muzzle flash shown for a moment after every accepted bot shot.
#[derive(Component, Debug, Default)]
pub struct BotMuzzleFlash(pub FlashPulse);

/// Sent for every accepted bot shot, hit or miss.
#[derive(Event, Debug, Clone, Copy)]
pub struct BotFired {
    pub bot: Entity,
    pub shot: BotShot,
}
