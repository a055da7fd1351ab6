//! Debug domain: developer overlay for watching the movement state machine.
//!
//! F1 toggles a panel with the active regime, velocity, speed, collider
//! extents and suspension state of the player.

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{toggle_debug_overlay, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_overlay,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            )
                .chain(),
        );
    }
}
