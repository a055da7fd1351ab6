//! Debug domain: overlay spawning and text formatting.

use bevy::prelude::*;

use crate::movement::{Body, MovementController};

/// Marker for the movement info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn overlay_text(controller: &MovementController, body: &Body) -> String {
    format!(
        "Regime: {:?}\nVel: ({:.2}, {:.2})\nSpeed: {:.2}\nExtents: {:.2} x {:.2}\nSuspended: {}",
        controller.state(),
        body.velocity.x,
        body.velocity.y,
        body.speed(),
        body.extents.x,
        body.extents.y,
        controller.is_suspended()
    )
}
