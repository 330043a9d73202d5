//! Session state - ammo, kills and what the bots know about the player.

use bevy::prelude::*;

/// Per-match counters owned by the session coordinator.
///
/// Created when a match starts and replaced on restart. Once `over` is set
/// nothing changes any more.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    ammo: u32,
    max_ammo: u32,
    kills: u32,
    over: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Session {
    pub fn new(max_ammo: u32) -> Self {
        Self {
            ammo: max_ammo,
            max_ammo,
            kills: 0,
            over: false,
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Take one round for a shot. `false` means the magazine is empty.
    pub fn consume_round(&mut self) -> bool {
        if self.over || self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Refill to capacity.
    pub fn reload(&mut self) {
        if !self.over {
            self.ammo = self.max_ammo;
        }
    }

    /// Force the magazine to a given count, clamped to capacity.
    pub fn set_ammo(&mut self, ammo: u32) {
        self.ammo = ammo.min(self.max_ammo);
    }

    pub fn record_kill(&mut self) {
        if !self.over {
            self.kills += 1;
        }
    }

    /// Mark the match terminal and return the final kill count.
    pub fn finish(&mut self) -> u32 {
        self.over = true;
        self.kills
    }
}

/// The player's position as last polled. Bots read this, never the live
/// transform.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vec3,
}

/// Cadence of the player position poll.
#[derive(Resource, Debug)]
pub struct SnapshotTimer(pub Timer);

impl SnapshotTimer {
    pub fn new(interval: f32) -> Self {
        Self(Timer::from_seconds(interval.max(0.0), TimerMode::Repeating))
    }
}

impl Default for SnapshotTimer {
    fn default() -> Self {
        Self::new(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_magazine_rejects_rounds() {
        let mut session = Session::new(2);
        assert!(session.consume_round());
        assert!(session.consume_round());
        assert!(!session.consume_round());
        assert_eq!(session.ammo(), 0);

        session.reload();
        assert_eq!(session.ammo(), 2);
    }

    #[test]
    fn reload_is_not_rate_limited() {
        let mut session = Session::new(30);
        session.set_ammo(3);
        session.reload();
        session.reload();
        assert_eq!(session.ammo(), 30);
    }

    #[test]
    fn set_ammo_clamps_to_capacity() {
        let mut session = Session::new(30);
        session.set_ammo(99);
        assert_eq!(session.ammo(), 30);
    }

    #[test]
    fn finished_session_is_frozen() {
        let mut session = Session::new(30);
        session.record_kill();
        session.record_kill();
        assert_eq!(session.finish(), 2);

        session.record_kill();
        session.reload();
        assert!(!session.consume_round());
        assert_eq!(session.kills(), 2);
        assert!(session.is_over());
    }
}
