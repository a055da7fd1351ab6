//! Debug domain: overlay toggle and refresh.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, overlay_text, spawn_debug_info_overlay};
use crate::movement::{Body, MovementController, Player};

/// Toggle the movement overlay with F1
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] Movement overlay {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

/// Update the overlay with the player's current movement state
pub(crate) fn update_debug_info_overlay(
    player_query: Query<(&MovementController, &Body), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Some((controller, body)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = overlay_text(controller, body);
    }
}
