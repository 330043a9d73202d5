//! Short-lived visual cues (muzzle flash, damage flash).

use bevy::prelude::*;

/// A transient on/off signal with a fixed duration.
///
/// The core triggers and ticks pulses; rendering only reads `is_active`.
/// Retriggering restarts the pulse.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlashPulse {
    remaining: f32,
}

impl FlashPulse {
    pub fn trigger(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn tick(&mut self, delta: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - delta).max(0.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Player-facing pulses consumed by the HUD.
#[derive(Resource, Debug, Default)]
pub struct HudCues {
    pub muzzle_flash: FlashPulse,
    pub damage_flash: FlashPulse,
}

/// Tick the HUD pulses.
pub fn tick_hud_cues(time: Res<Time>, mut cues: ResMut<HudCues>) {
    let delta = time.delta_secs();
    cues.muzzle_flash.tick(delta);
    cues.damage_flash.tick(delta);
}
