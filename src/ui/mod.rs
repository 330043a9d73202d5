//! UI module - HUD readouts, overlays and menu screens.

mod hud;
mod menus;
mod plugin;

pub use plugin::UiPlugin;
