//! Player-related components and resources.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Whether the player is looking down the scope (right mouse held).
///
/// Written by input, read by movement and the HUD.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AimState {
    pub scoped: bool,
}

/// The player's first-person camera, a child of the player entity.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Configuration for the first-person controller.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Invert Y-axis for mouse look
    pub invert_y: bool,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Speed multiplier while scoped
    pub scoped_speed_multiplier: f32,
    /// Vertical field of view, radians
    pub fov: f32,
    pub scoped_fov: f32,
    /// How fast the field of view eases toward its target (1/s)
    pub zoom_rate: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.5,
            invert_y: false,
            move_speed: 5.0,
            scoped_speed_multiplier: 0.5,
            fov: 75_f32.to_radians(),
            scoped_fov: 30_f32.to_radians(),
            zoom_rate: 8.0,
        }
    }
}

impl PlayerConfig {
    pub fn speed(&self, scoped: bool) -> f32 {
        if scoped {
            self.move_speed * self.scoped_speed_multiplier
        } else {
            self.move_speed
        }
    }

    pub fn target_fov(&self, scoped: bool) -> f32 {
        if scoped {
            self.scoped_fov
        } else {
            self.fov
        }
    }

    /// Move `current` a frame's worth toward the target field of view.
    pub fn ease_fov(&self, current: f32, scoped: bool, delta: f32) -> f32 {
        let blend = (delta * self.zoom_rate).clamp(0.0, 1.0);
        current + (self.target_fov(scoped) - current) * blend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoping_halves_speed() {
        let config = PlayerConfig::default();
        assert_eq!(config.speed(true), config.move_speed * 0.5);
        assert_eq!(config.speed(false), config.move_speed);
    }

    #[test]
    fn zoom_eases_instead_of_snapping() {
        let config = PlayerConfig::default();
        let tick = 1.0 / 60.0;

        let first = config.ease_fov(config.fov, true, tick);
        assert!(first < config.fov);
        assert!(first > config.scoped_fov);

        let mut fov = config.fov;
        for _ in 0..120 {
            fov = config.ease_fov(fov, true, tick);
        }
        assert!((fov - config.scoped_fov).abs() < 1e-3);

        // A long hitch lands on the target rather than overshooting
        let hitch = config.ease_fov(config.fov, true, 1.0);
        assert!((hitch - config.scoped_fov).abs() < 1e-6);
    }
}
