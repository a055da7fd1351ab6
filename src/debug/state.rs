//! Debug domain: overlay visibility state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement overlay is visible
    pub show_info: bool,
}
