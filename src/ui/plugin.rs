//! UI plugin - menus and HUD.

use bevy::prelude::*;

use super::{hud, menus};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        menus::setup_menu_systems(app);
    }
}
