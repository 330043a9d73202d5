//! Combat tuning - every number the bot AI and weapons depend on.
//!
//! Defaults are compiled in; `assets/data/combat.ron` can override any subset
//! of fields.

use std::path::Path;

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use super::data::{load_ron_file, parse_ron};
use super::error::DataLoadError;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/combat.ron";

/// Inclusive `min..=max` range of seconds (or units) to draw from.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw uniformly from the span. A collapsed span always yields `min`.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Inclusive integer damage range for bot hits.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        if self.max > self.min {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }
}

/// All gameplay constants of the combat core.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CombatTuning {
    // --- Bot behavior ---
    /// Below this distance a bot stops patrolling and engages
    pub engage_range: f32,
    /// Below this distance a bot backs away from the player
    pub too_close_range: f32,
    /// Distances where a bot is happy to hold its ground
    pub optimal_band: Span,
    /// Distance from the player a repositioning bot aims for
    pub standoff_distance: f32,
    /// Maximum sideways offset when repositioning
    pub strafe_offset: f32,
    /// How far ahead of itself a retreating bot sets its target
    pub retreat_offset: f32,
    /// Patrol points are picked within this radius of the spawn point
    pub patrol_radius: f32,
    pub patrol_interval: Span,
    pub reposition_interval: Span,
    pub patrol_speed: f32,
    pub engage_speed: f32,
    /// Exponential turn rate (1/s) while tracking the player
    pub turn_rate: f32,
    pub arrival_threshold: f32,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,

    // --- Bot fire control ---
    /// Cadence between trigger attempts while aiming
    pub fire_interval: Span,
    /// Hard cooldown between accepted bot shots
    pub bot_cooldown: f32,
    pub base_accuracy: f32,
    /// Hit chance lost per unit of distance
    pub distance_penalty: f32,
    pub max_penalty: f32,
    pub bot_damage: DamageRange,

    // --- Player ---
    pub max_health: u32,
    pub max_ammo: u32,
    /// Minimum seconds between accepted player shots
    pub player_fire_interval: f32,
    pub player_damage: f32,
    /// Hitscan range
    pub max_range: f32,

    // --- Timing ---
    /// Damage calls closer together than this are dropped
    pub damage_debounce: f32,
    /// Delay between health reaching zero and the death being reported
    pub death_settle: f32,
    /// How often bots get a fresh copy of the player position
    pub snapshot_interval: f32,
    pub muzzle_flash: f32,
    pub damage_flash: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            engage_range: 40.0,
            too_close_range: 10.0,
            optimal_band: Span::new(15.0, 30.0),
            standoff_distance: 20.0,
            strafe_offset: 5.0,
            retreat_offset: 8.0,
            patrol_radius: 8.0,
            patrol_interval: Span::new(4.0, 6.0),
            reposition_interval: Span::new(2.0, 3.0),
            patrol_speed: 2.0,
            engage_speed: 3.5,
            turn_rate: 6.0,
            arrival_threshold: 0.5,
            bob_amplitude: 0.05,
            bob_frequency: 3.0,

            fire_interval: Span::new(2.0, 4.0),
            bot_cooldown: 0.8,
            base_accuracy: 0.35,
            distance_penalty: 0.008,
            max_penalty: 0.45,
            bot_damage: DamageRange::new(5, 15),

            max_health: 100,
            max_ammo: 30,
            player_fire_interval: 0.12,
            player_damage: 35.0,
            max_range: 100.0,

            damage_debounce: 0.05,
            death_settle: 0.1,
            snapshot_interval: 0.1,
            muzzle_flash: 0.05,
            damage_flash: 0.15,
        }
    }
}

impl CombatTuning {
    /// Parse tuning from a RON string and validate it.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        let tuning: Self = parse_ron(contents, origin)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a RON file and validate it.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let tuning: Self = load_ron_file(path)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject combinations the state machine cannot work with.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let spans = [
            ("optimal_band", self.optimal_band),
            ("patrol_interval", self.patrol_interval),
            ("reposition_interval", self.reposition_interval),
            ("fire_interval", self.fire_interval),
        ];
        for (name, span) in spans {
            if !span.is_ordered() {
                return Err(DataLoadError::InvalidTuning(format!(
                    "{name} has min {} above max {}",
                    span.min, span.max
                )));
            }
        }

        if self.bot_damage.min > self.bot_damage.max {
            return Err(DataLoadError::InvalidTuning(
                "bot_damage min is above max".to_string(),
            ));
        }

        if !(self.too_close_range < self.engage_range) {
            return Err(DataLoadError::InvalidTuning(
                "too_close_range must be below engage_range".to_string(),
            ));
        }

        let positive = [
            ("patrol_interval.min", self.patrol_interval.min),
            ("reposition_interval.min", self.reposition_interval.min),
            ("fire_interval.min", self.fire_interval.min),
            ("bot_cooldown", self.bot_cooldown),
            ("player_fire_interval", self.player_fire_interval),
            ("snapshot_interval", self.snapshot_interval),
            ("max_range", self.max_range),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(DataLoadError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.max_health == 0 {
            return Err(DataLoadError::InvalidTuning(
                "max_health must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
