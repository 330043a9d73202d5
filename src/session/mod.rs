//! Session module - roster bookkeeping, ammo, kills and the terminal state.

mod plugin;
mod resources;
mod systems;

pub use plugin::SessionPlugin;
pub use resources::*;
pub use systems::match_live;
