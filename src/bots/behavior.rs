//! Bot behavior state machine.
//!
//! Each tick a bot classifies its distance to the last known player position
//! into a [`BotState`], updates its movement target and facing for that
//! state, then walks toward the target. Everything here is plain data and
//! math so it can be driven without a running app.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use rand::Rng;

use crate::core::CombatTuning;

/// Below this length a direction is treated as undefined.
const DIRECTION_EPSILON: f32 = 1e-4;

/// What a bot is doing this tick, derived from distance to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotState {
    /// Player out of engagement range: wander around the spawn point
    #[default]
    Patrol,
    /// Player too close: back straight away
    Retreat,
    /// Engaged but outside the optimal band: flank to a standoff point
    Reposition,
    /// Engaged inside the optimal band: keep the current target
    Hold,
}

impl BotState {
    /// Every state but `Patrol` tracks the player and may shoot.
    pub fn is_engaged(self) -> bool {
        self != BotState::Patrol
    }
}

/// Map a distance to the player onto a behavior state.
pub fn classify(distance: f32, tuning: &CombatTuning) -> BotState {
    if distance >= tuning.engage_range {
        BotState::Patrol
    } else if distance < tuning.too_close_range {
        BotState::Retreat
    } else if tuning.optimal_band.contains(distance) {
        BotState::Hold
    } else {
        BotState::Reposition
    }
}

/// Offset on the ground plane (y dropped).
pub fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance on the ground plane.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    flat(b - a).length()
}

/// Yaw that faces along `direction` (0 = +Z).
fn yaw_of(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

/// Unit vector for a yaw angle.
fn heading(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Wrap an angle into `-PI..PI`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Turn from `current` toward `target` by the exponential fraction
/// `1 - e^(-rate * delta)` of the shortest arc.
pub fn turn_towards(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    let t = 1.0 - (-rate * delta).exp();
    wrap_angle(current + wrap_angle(target - current) * t)
}

/// Per-bot controller state.
///
/// Timers are accumulators in seconds. `patrol_timer` only advances while
/// patrolling, so a bot that drops back into patrol keeps walking to its old
/// target until its own re-roll is due. `shoot_timer` only advances while
/// aiming.
#[derive(Component, Debug, Clone)]
pub struct BotBrain {
    /// Spawn point, center of the patrol area
    pub origin: Vec3,
    /// Current movement destination
    pub target: Vec3,
    /// Yaw in radians
    pub facing: f32,
    pub state: BotState,
    pub is_aiming: bool,
    pub patrol_timer: f32,
    pub patrol_interval: f32,
    pub reposition_timer: f32,
    pub reposition_interval: f32,
    pub shoot_timer: f32,
    pub shoot_interval: f32,
}

impl BotBrain {
    pub fn new(origin: Vec3, tuning: &CombatTuning, rng: &mut impl Rng) -> Self {
        let reposition_interval = tuning.reposition_interval.sample(rng);
        Self {
            origin,
            target: origin,
            facing: 0.0,
            state: BotState::Patrol,
            is_aiming: false,
            patrol_timer: 0.0,
            patrol_interval: tuning.patrol_interval.sample(rng),
            // First reposition happens as soon as one is needed
            reposition_timer: reposition_interval,
            reposition_interval,
            shoot_timer: 0.0,
            shoot_interval: tuning.fire_interval.sample(rng),
        }
    }

    /// Decide this tick's state and update target and facing.
    ///
    /// `player` is the last polled player position, not the live one.
    pub fn think(
        &mut self,
        position: Vec3,
        player: Vec3,
        delta: f32,
        tuning: &CombatTuning,
        rng: &mut impl Rng,
    ) -> BotState {
        let to_player = flat(player - position);
        let distance = to_player.length();
        let state = classify(distance, tuning);

        self.state = state;
        self.is_aiming = state.is_engaged();

        if !state.is_engaged() {
            self.patrol(delta, tuning, rng);
            return state;
        }

        if distance > DIRECTION_EPSILON {
            self.facing = turn_towards(self.facing, yaw_of(to_player), tuning.turn_rate, delta);
        }
        self.reposition_timer += delta;

        // Direction from the player toward the bot. Standing on top of the
        // player leaves it undefined, so back off along our own facing.
        let away = if distance > DIRECTION_EPSILON {
            -to_player / distance
        } else {
            -heading(self.facing)
        };

        match state {
            BotState::Retreat => {
                self.set_target(flat(position) + away * tuning.retreat_offset);
            }
            BotState::Reposition => {
                if self.reposition_timer >= self.reposition_interval {
                    self.reposition_timer = 0.0;
                    self.reposition_interval = tuning.reposition_interval.sample(rng);

                    let lateral = Vec3::new(-away.z, 0.0, away.x);
                    let strafe = if tuning.strafe_offset > 0.0 {
                        rng.gen_range(-tuning.strafe_offset..=tuning.strafe_offset)
                    } else {
                        0.0
                    };
                    self.set_target(
                        flat(player) + away * tuning.standoff_distance + lateral * strafe,
                    );
                }
            }
            // Keep walking to whatever target we already have
            BotState::Hold | BotState::Patrol => {}
        }

        state
    }

    fn patrol(&mut self, delta: f32, tuning: &CombatTuning, rng: &mut impl Rng) {
        self.patrol_timer += delta;
        if self.patrol_timer < self.patrol_interval {
            return;
        }

        self.patrol_timer = 0.0;
        self.patrol_interval = tuning.patrol_interval.sample(rng);

        let radius = tuning.patrol_radius.max(0.0);
        let offset = if radius > 0.0 {
            Vec3::new(
                rng.gen_range(-radius..=radius),
                0.0,
                rng.gen_range(-radius..=radius),
            )
        } else {
            Vec3::ZERO
        };
        self.set_target(flat(self.origin) + offset);
    }

    fn set_target(&mut self, ground: Vec3) {
        self.target = Vec3::new(ground.x, self.origin.y, ground.z);
    }

    /// Move toward the target and return the new position.
    ///
    /// Movement happens on the ground plane, is clamped to the arena
    /// (`half_extent` in x and z) and gets a small cosmetic bob in y.
    pub fn advance(
        &mut self,
        position: Vec3,
        delta: f32,
        elapsed: f32,
        half_extent: f32,
        tuning: &CombatTuning,
    ) -> Vec3 {
        let mut next = position;
        let to_target = flat(self.target - position);
        let distance = to_target.length();

        if distance > tuning.arrival_threshold {
            let direction = to_target / distance;
            let speed = if self.state.is_engaged() {
                tuning.engage_speed
            } else {
                tuning.patrol_speed
            };
            next += direction * (speed * delta).min(distance);

            // Engaged bots keep facing the player while they move
            if !self.state.is_engaged() {
                self.facing = yaw_of(direction);
            }
        }

        next.x = next.x.clamp(-half_extent, half_extent);
        next.z = next.z.clamp(-half_extent, half_extent);
        next.y = self.origin.y + (elapsed * tuning.bob_frequency).sin() * tuning.bob_amplitude;
        next
    }

    /// Advance the fire cadence; `true` means pull the trigger now.
    ///
    /// Only runs while aiming. Whether the shot is actually accepted is up
    /// to the bot's [`FireControl`](crate::combat::FireControl).
    pub fn tick_trigger(&mut self, delta: f32, tuning: &CombatTuning, rng: &mut impl Rng) -> bool {
        if !self.is_aiming {
            return false;
        }

        self.shoot_timer += delta;
        if self.shoot_timer > self.shoot_interval {
            self.shoot_timer = 0.0;
            self.shoot_interval = tuning.fire_interval.sample(rng);
            return true;
        }
        false
    }

    /// Rotation matching the current facing.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.facing)
    }
}
