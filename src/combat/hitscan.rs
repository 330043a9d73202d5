//! Hitscan hit resolution for player shots.
//!
//! A shot is a ray. The scene reports every intersection ordered by
//! distance, only the nearest one counts, and the registry tells us which
//! combatant (if any) owns the struck geometry. A shot therefore damages at
//! most one target.

use std::collections::HashMap;

use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::prelude::*;

/// A single accepted shot. Transient, consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec3,
    pub direction: Dir3,
}

impl Shot {
    /// Build a shot, rejecting zero-length or non-finite directions.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !origin.is_finite() {
            return None;
        }
        Dir3::new(direction)
            .ok()
            .map(|direction| Self { origin, direction })
    }
}

/// An accepted player shot on its way to hit resolution.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShotFired {
    pub shooter: Entity,
    pub shot: Shot,
}

/// One ray intersection reported by the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Struck geometry (collider or hit volume entity)
    pub entity: Entity,
    pub distance: f32,
}

/// Anything that can answer ray queries against world geometry.
pub trait SceneRaycast {
    /// All intersections within `max_distance`, nearest first.
    fn cast_ray(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Vec<RayHit>;
}

/// Simple shot-blocking geometry attached to an entity.
///
/// Centered on the entity's global translation. Boxes are axis aligned.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum HitVolume {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// Ray queries against [`HitVolume`]s, used when no physics backend is
/// running (headless matches and tests).
#[derive(Debug, Default)]
pub struct VolumeScene {
    volumes: Vec<(Entity, Vec3, HitVolume)>,
}

impl VolumeScene {
    pub fn new(volumes: impl IntoIterator<Item = (Entity, Vec3, HitVolume)>) -> Self {
        Self {
            volumes: volumes.into_iter().collect(),
        }
    }
}

impl SceneRaycast for VolumeScene {
    fn cast_ray(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Vec<RayHit> {
        let ray = RayCast3d::new(origin, direction, max_distance);

        let mut hits: Vec<RayHit> = self
            .volumes
            .iter()
            .filter_map(|(entity, center, volume)| {
                let distance = match *volume {
                    HitVolume::Sphere { radius } => {
                        ray.sphere_intersection_at(&BoundingSphere::new(*center, radius))
                    }
                    HitVolume::Box { half_extents } => {
                        ray.aabb_intersection_at(&Aabb3d::new(*center, half_extents))
                    }
                }?;
                Some(RayHit {
                    entity: *entity,
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Maps struck geometry to the combatant that owns it.
///
/// Bot hitboxes are registered at spawn and forgotten when the bot is
/// removed, so a shot never has to walk the scene hierarchy.
#[derive(Resource, Debug, Default)]
pub struct HitboxRegistry {
    owners: HashMap<Entity, Entity>,
}

impl HitboxRegistry {
    pub fn register(&mut self, hitbox: Entity, owner: Entity) {
        self.owners.insert(hitbox, owner);
    }

    pub fn owner_of(&self, hitbox: Entity) -> Option<Entity> {
        self.owners.get(&hitbox).copied()
    }

    /// Drop every hitbox belonging to `owner`.
    pub fn forget_owner(&mut self, owner: Entity) {
        self.owners.retain(|_, o| *o != owner);
    }

    pub fn clear(&mut self) {
        self.owners.clear();
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Resolve a shot to the combatant it strikes, if any.
///
/// Only the nearest intersection is considered: scenery in front of a bot
/// absorbs the shot, and a bot in front of another bot shields it.
pub fn resolve_shot(
    scene: &impl SceneRaycast,
    registry: &HitboxRegistry,
    shot: &Shot,
    max_range: f32,
) -> Option<Entity> {
    let nearest = scene
        .cast_ray(shot.origin, shot.direction, max_range)
        .into_iter()
        .next()?;
    registry.owner_of(nearest.entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scene that returns canned hits and counts queries.
    struct ScriptedScene {
        hits: Vec<RayHit>,
        casts: Cell<usize>,
    }

    impl SceneRaycast for ScriptedScene {
        fn cast_ray(&self, _origin: Vec3, _direction: Dir3, max_distance: f32) -> Vec<RayHit> {
            self.casts.set(self.casts.get() + 1);
            self.hits
                .iter()
                .copied()
                .filter(|hit| hit.distance <= max_distance)
                .collect()
        }
    }

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    fn forward_shot() -> Shot {
        Shot::new(Vec3::new(0.0, 1.7, 0.0), Vec3::NEG_Z).unwrap()
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Shot::new(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(Shot::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0)).is_none());
        assert!(Shot::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0)).is_some());
    }

    #[test]
    fn nearest_bot_takes_the_hit() {
        let (near_box, near_bot, far_box, far_bot) = (entity(1), entity(2), entity(3), entity(4));
        let mut registry = HitboxRegistry::default();
        registry.register(near_box, near_bot);
        registry.register(far_box, far_bot);

        let scene = ScriptedScene {
            hits: vec![
                RayHit { entity: near_box, distance: 3.0 },
                RayHit { entity: far_box, distance: 9.0 },
            ],
            casts: Cell::new(0),
        };

        assert_eq!(resolve_shot(&scene, &registry, &forward_shot(), 100.0), Some(near_bot));
        assert_eq!(scene.casts.get(), 1);
    }

    #[test]
    fn scenery_in_front_absorbs_the_shot() {
        let (wall, hitbox, bot) = (entity(1), entity(2), entity(3));
        let mut registry = HitboxRegistry::default();
        registry.register(hitbox, bot);

        let scene = ScriptedScene {
            hits: vec![
                RayHit { entity: wall, distance: 2.0 },
                RayHit { entity: hitbox, distance: 5.0 },
            ],
            casts: Cell::new(0),
        };

        assert_eq!(resolve_shot(&scene, &registry, &forward_shot(), 100.0), None);
    }

    #[test]
    fn empty_scene_hits_nothing() {
        let scene = ScriptedScene {
            hits: Vec::new(),
            casts: Cell::new(0),
        };
        assert_eq!(
            resolve_shot(&scene, &HitboxRegistry::default(), &forward_shot(), 100.0),
            None
        );
    }

    #[test]
    fn forgotten_owner_is_no_longer_hit() {
        let (hitbox, bot) = (entity(1), entity(2));
        let mut registry = HitboxRegistry::default();
        registry.register(hitbox, bot);
        registry.forget_owner(bot);
        assert!(registry.is_empty());

        let scene = ScriptedScene {
            hits: vec![RayHit { entity: hitbox, distance: 1.0 }],
            casts: Cell::new(0),
        };
        assert_eq!(resolve_shot(&scene, &registry, &forward_shot(), 100.0), None);
    }

    #[test]
    fn volume_scene_orders_hits_by_distance() {
        let (far, near, off_axis) = (entity(1), entity(2), entity(3));
        let scene = VolumeScene::new([
            (far, Vec3::new(0.0, 1.7, -20.0), HitVolume::Sphere { radius: 0.5 }),
            (
                near,
                Vec3::new(0.0, 1.0, -5.0),
                HitVolume::Box {
                    half_extents: Vec3::new(1.0, 1.0, 0.2),
                },
            ),
            (off_axis, Vec3::new(10.0, 1.7, -5.0), HitVolume::Sphere { radius: 0.5 }),
        ]);

        let hits = scene.cast_ray(Vec3::new(0.0, 1.7, 0.0), Dir3::NEG_Z, 100.0);
        let order: Vec<Entity> = hits.iter().map(|hit| hit.entity).collect();
        assert_eq!(order, vec![near, far]);
        assert!((hits[0].distance - 4.8).abs() < 1e-3);
        assert!((hits[1].distance - 19.5).abs() < 1e-3);
    }

    #[test]
    fn volume_scene_respects_max_range() {
        let target = entity(1);
        let scene = VolumeScene::new([(
            target,
            Vec3::new(0.0, 1.7, -150.0),
            HitVolume::Sphere { radius: 1.0 },
        )]);
        assert!(scene.cast_ray(Vec3::new(0.0, 1.7, 0.0), Dir3::NEG_Z, 100.0).is_empty());
    }
}
