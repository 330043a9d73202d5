//! Combatant health model shared by the player and bots.

use bevy::prelude::*;

/// Result of a single [`Health::take_damage`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Damage went through. `dealt` may be less than requested at low health.
    Applied { dealt: u32, remaining: u32 },
    /// Arrived inside the debounce window of the previous hit.
    Debounced,
    /// Target already dead, or the amount rounds to less than one point.
    Ignored,
}

/// Component for entities that can take damage.
///
/// Invariants:
/// - `current` stays within `0..=maximum` and never increases.
/// - `dead` flips false → true once, at least `settle` seconds after health
///   first reached zero, and never reverts.
/// - [`Health::settle_death`] returns `true` at most once, which is what
///   makes the death notification exactly-once.
#[derive(Component, Debug, Clone)]
pub struct Health {
    current: u32,
    maximum: u32,
    /// Time of the last hit that went through, for debouncing
    last_damage_at: Option<f64>,
    /// Time health first reached zero
    depleted_at: Option<f64>,
    dead: bool,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            maximum: max,
            last_damage_at: None,
            depleted_at: None,
            dead: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }

    /// Health has reached zero (death may not have settled yet).
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Apply damage at time `now` (seconds).
    ///
    /// No-op when dead, when `amount` does not round to at least one point,
    /// or when the previous successful hit was less than `debounce` seconds
    /// ago. The amount is rounded to whole health points and health clamps
    /// at zero.
    pub fn take_damage(&mut self, amount: f32, now: f64, debounce: f32) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }

        // Also catches NaN
        if !(amount > 0.0) {
            return DamageOutcome::Ignored;
        }

        // Rounds to nothing, so it must not open a debounce window either
        let whole = amount.round();
        if whole < 1.0 {
            return DamageOutcome::Ignored;
        }

        if let Some(last) = self.last_damage_at {
            if now - last < debounce as f64 {
                return DamageOutcome::Debounced;
            }
        }

        let dealt = (whole as u32).min(self.current);
        self.current -= dealt;
        self.last_damage_at = Some(now);

        if self.current == 0 && self.depleted_at.is_none() {
            self.depleted_at = Some(now);
        }

        DamageOutcome::Applied {
            dealt,
            remaining: self.current,
        }
    }

    /// Finalize death once health has been zero for `settle` seconds.
    ///
    /// Returns `true` exactly once per combatant, on the call that flips it
    /// to dead. Every later call returns `false`.
    pub fn settle_death(&mut self, now: f64, settle: f32) -> bool {
        if self.dead {
            return false;
        }

        match self.depleted_at {
            Some(at) if now - at >= settle as f64 => {
                self.dead = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: f32 = 0.05;
    const SETTLE: f32 = 0.1;

    #[test]
    fn damage_reduces_health() {
        let mut health = Health::new(100);
        let outcome = health.take_damage(35.0, 0.0, DEBOUNCE);
        assert_eq!(
            outcome,
            DamageOutcome::Applied {
                dealt: 35,
                remaining: 65
            }
        );
        assert_eq!(health.current(), 65);
        assert!(!health.is_depleted());
    }

    #[test]
    fn hits_inside_debounce_window_are_dropped() {
        let mut health = Health::new(100);
        health.take_damage(10.0, 1.0, DEBOUNCE);
        assert_eq!(health.take_damage(10.0, 1.02, DEBOUNCE), DamageOutcome::Debounced);
        assert_eq!(health.current(), 90);

        // Window is measured from the last successful hit
        assert!(matches!(
            health.take_damage(10.0, 1.06, DEBOUNCE),
            DamageOutcome::Applied { .. }
        ));
        assert_eq!(health.current(), 80);
    }

    #[test]
    fn health_clamps_at_zero() {
        let mut health = Health::new(100);
        let outcome = health.take_damage(250.0, 0.0, DEBOUNCE);
        assert_eq!(
            outcome,
            DamageOutcome::Applied {
                dealt: 100,
                remaining: 0
            }
        );
        assert!(health.is_depleted());
    }

    #[test]
    fn invalid_amounts_are_ignored() {
        let mut health = Health::new(100);
        assert_eq!(health.take_damage(-20.0, 0.0, DEBOUNCE), DamageOutcome::Ignored);
        assert_eq!(health.take_damage(0.0, 0.0, DEBOUNCE), DamageOutcome::Ignored);
        assert_eq!(health.take_damage(f32::NAN, 0.0, DEBOUNCE), DamageOutcome::Ignored);
        assert_eq!(health.current(), 100);

        // Ignored calls do not open a debounce window
        assert!(matches!(
            health.take_damage(5.0, 0.01, DEBOUNCE),
            DamageOutcome::Applied { .. }
        ));
    }

    #[test]
    fn sub_point_damage_does_not_block_the_next_hit() {
        let mut health = Health::new(100);
        assert_eq!(health.take_damage(0.4, 1.0, DEBOUNCE), DamageOutcome::Ignored);
        assert_eq!(
            health.take_damage(10.0, 1.01, DEBOUNCE),
            DamageOutcome::Applied {
                dealt: 10,
                remaining: 90
            }
        );
    }

    #[test]
    fn death_settles_after_delay_exactly_once() {
        let mut health = Health::new(100);
        health.take_damage(100.0, 2.0, DEBOUNCE);
        assert!(health.is_depleted());
        assert!(!health.is_dead());

        // Still settling
        assert!(!health.settle_death(2.05, SETTLE));
        assert!(!health.is_dead());

        // More hits while settling do not move the settle point
        health.take_damage(40.0, 2.06, DEBOUNCE);
        health.take_damage(40.0, 2.09, DEBOUNCE);

        assert!(health.settle_death(2.1, SETTLE));
        assert!(health.is_dead());

        for i in 0..10 {
            assert!(!health.settle_death(2.2 + i as f64, SETTLE));
        }
    }

    #[test]
    fn dead_combatant_ignores_damage() {
        let mut health = Health::new(50);
        health.take_damage(60.0, 0.0, DEBOUNCE);
        assert!(health.settle_death(1.0, SETTLE));
        assert_eq!(health.take_damage(10.0, 5.0, DEBOUNCE), DamageOutcome::Ignored);
        assert_eq!(health.current(), 0);
    }

    #[test]
    fn health_never_leaves_bounds_under_any_sequence() {
        let amounts = [3.0, -1.0, 40.0, f32::NAN, 0.4, 17.6, 1000.0, 2.0, f32::INFINITY];
        let mut health = Health::new(100);
        let mut previous = health.current();
        let mut reported = 0;

        for (step, amount) in amounts.iter().cycle().take(200).enumerate() {
            let now = step as f64 * 0.02;
            health.take_damage(*amount, now, DEBOUNCE);
            assert!(health.current() <= 100);
            assert!(health.current() <= previous);
            previous = health.current();
            if health.settle_death(now, SETTLE) {
                reported += 1;
            }
        }

        assert!(health.is_dead());
        assert_eq!(reported, 1);
    }

    #[test]
    fn untouched_health_never_settles() {
        let mut health = Health::new(100);
        assert!(!health.settle_death(100.0, SETTLE));
        assert_eq!(health.percentage(), 1.0);
    }
}
