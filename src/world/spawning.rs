//! Entity spawning for static arena geometry.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::layout::ArenaLayout;
use crate::combat::HitVolume;
use crate::core::MatchEntity;

/// Marker for cover blocks. They stop shots but belong to no combatant.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cover {
    pub half_extents: Vec3,
}

/// Spawn the layout's cover blocks.
pub fn spawn_cover(mut commands: Commands, layout: Res<ArenaLayout>) {
    for block in &layout.cover {
        let half = block.half_extents();
        commands.spawn((
            Cover { half_extents: half },
            HitVolume::Box { half_extents: half },
            Collider::cuboid(half.x, half.y, half.z),
            Transform::from_translation(block.center()),
            MatchEntity,
        ));
    }

    debug!("Spawned {} cover blocks", layout.cover.len());
}
