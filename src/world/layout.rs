//! Arena layout - map bounds, spawn points and cover, loaded from RON.

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{load_ron_file, parse_ron, DataLoadError};

/// Default location of the layout file, relative to the working directory.
pub const LAYOUT_PATH: &str = "assets/data/arena.ron";

/// A static box that blocks shots and movement.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CoverBlock {
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

impl CoverBlock {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center: center.to_array(),
            half_extents: half_extents.to_array(),
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::from_array(self.half_extents)
    }
}

/// Resource describing the arena a match is played in.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaLayout {
    /// Positions are clamped to `-half_extent..=half_extent` in x and z
    pub half_extent: f32,
    /// Player eye position at match start
    pub player_start: [f32; 3],
    /// One bot per entry, spawned in order
    pub bot_spawns: Vec<[f32; 3]>,
    pub cover: Vec<CoverBlock>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            half_extent: 35.0,
            player_start: [0.0, 1.7, 0.0],
            bot_spawns: vec![
                [-10.0, 0.0, -10.0],
                [10.0, 0.0, -10.0],
                [-10.0, 0.0, 10.0],
                [10.0, 0.0, 10.0],
                [0.0, 0.0, -20.0],
                [0.0, 0.0, 20.0],
                [-20.0, 0.0, 0.0],
                [20.0, 0.0, 0.0],
            ],
            cover: vec![
                CoverBlock::new(Vec3::new(6.0, 0.5, -4.0), Vec3::splat(0.5)),
                CoverBlock::new(Vec3::new(-7.0, 0.5, 5.0), Vec3::splat(0.5)),
                CoverBlock::new(Vec3::new(14.0, 0.5, 14.0), Vec3::splat(0.5)),
                CoverBlock::new(Vec3::new(-15.0, 0.5, -13.0), Vec3::splat(0.5)),
                CoverBlock::new(Vec3::new(0.0, 1.0, -14.0), Vec3::new(4.0, 1.0, 0.15)),
                CoverBlock::new(Vec3::new(0.0, 1.0, 14.0), Vec3::new(4.0, 1.0, 0.15)),
            ],
        }
    }
}

impl ArenaLayout {
    /// Layout with no cover, for a handful of bots. Handy for scripted matches.
    pub fn open(player_start: Vec3, bot_spawns: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            player_start: player_start.to_array(),
            bot_spawns: bot_spawns.into_iter().map(|p| p.to_array()).collect(),
            cover: Vec::new(),
            ..Default::default()
        }
    }

    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        let layout: Self = parse_ron(contents, origin)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let layout: Self = load_ron_file(path)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), DataLoadError> {
        if !(self.half_extent > 0.0) {
            return Err(DataLoadError::InvalidTuning(format!(
                "half_extent must be positive, got {}",
                self.half_extent
            )));
        }
        Ok(())
    }

    pub fn player_start(&self) -> Vec3 {
        Vec3::from_array(self.player_start)
    }

    pub fn bot_spawn_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.bot_spawns.iter().copied().map(Vec3::from_array)
    }

    /// Clamp a position to the arena bounds (x and z only).
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_extent, self.half_extent),
            position.y,
            position.z.clamp(-self.half_extent, self.half_extent),
        )
    }
}
