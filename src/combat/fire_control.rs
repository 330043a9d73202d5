//! Fire control - rate limiting and the bot accuracy model.

use bevy::prelude::*;
use rand::Rng;

use crate::core::{CombatTuning, DamageRange};

/// Rate limiter for a shooter.
///
/// A shot is accepted only if at least `min_interval` seconds passed since
/// the previous accepted shot. The player uses the short trigger interval,
/// bots use a hard cooldown layered under their cadence timer.
#[derive(Component, Debug, Clone)]
pub struct FireControl {
    min_interval: f64,
    last_shot_at: Option<f64>,
}

impl FireControl {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval: min_interval as f64,
            last_shot_at: None,
        }
    }

    /// Whether a shot at `now` would be accepted.
    pub fn can_fire(&self, now: f64) -> bool {
        match self.last_shot_at {
            Some(last) => now - last >= self.min_interval,
            None => true,
        }
    }

    /// Accept a shot at `now` if the interval allows it.
    pub fn try_fire(&mut self, now: f64) -> bool {
        if !self.can_fire(now) {
            return false;
        }
        self.last_shot_at = Some(now);
        true
    }

    pub fn last_shot_at(&self) -> Option<f64> {
        self.last_shot_at
    }
}

/// Distance-based hit chance for bot shots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy {
    pub base: f32,
    pub penalty_per_unit: f32,
    pub max_penalty: f32,
}

impl Accuracy {
    pub fn from_tuning(tuning: &CombatTuning) -> Self {
        Self {
            base: tuning.base_accuracy,
            penalty_per_unit: tuning.distance_penalty,
            max_penalty: tuning.max_penalty,
        }
    }

    /// `base - min(distance * rate, max_penalty)`, clamped to `0..=1`.
    pub fn hit_chance(&self, distance: f32) -> f32 {
        let penalty = (distance.max(0.0) * self.penalty_per_unit).min(self.max_penalty);
        (self.base - penalty).clamp(0.0, 1.0)
    }

    pub fn roll(&self, distance: f32, rng: &mut impl Rng) -> bool {
        rng.gen::<f32>() < self.hit_chance(distance)
    }
}

/// What a single accepted bot shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotShot {
    Hit { damage: u32 },
    Miss,
}

/// Roll hit and damage for a bot shot at the given distance.
pub fn roll_bot_shot(
    accuracy: &Accuracy,
    damage: &DamageRange,
    distance: f32,
    rng: &mut impl Rng,
) -> BotShot {
    if accuracy.roll(distance, rng) {
        BotShot::Hit {
            damage: damage.roll(rng),
        }
    } else {
        BotShot::Miss
    }
}
