//! Ray queries against Rapier colliders, used by the windowed game.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::hitscan::{RayHit, SceneRaycast};

/// [`SceneRaycast`] over the physics world.
///
/// The shooter's own collider is excluded so a shot never starts inside it.
pub struct RapierScene<'a> {
    context: &'a RapierContext,
    exclude: Option<Entity>,
}

impl<'a> RapierScene<'a> {
    pub fn new(context: &'a RapierContext, exclude: Option<Entity>) -> Self {
        Self { context, exclude }
    }
}

impl SceneRaycast for RapierScene<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Vec<RayHit> {
        let mut filter = QueryFilter::default();
        if let Some(entity) = self.exclude {
            filter = filter.exclude_collider(entity).exclude_rigid_body(entity);
        }

        let mut hits = Vec::new();
        self.context.intersections_with_ray(
            origin,
            direction.as_vec3(),
            max_distance,
            true,
            filter,
            |entity, intersection| {
                hits.push(RayHit {
                    entity,
                    distance: intersection.time_of_impact,
                });
                true // Keep collecting, we sort afterwards
            },
        );

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
