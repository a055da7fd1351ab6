//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{FrameEdges, InputEdge, MovementInput};

const SLIDE_KEYS: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::ShiftLeft];

/// Record the edges of one logical control bound to several keys.
///
/// The control is held while any of its keys is down, so swapping between
/// keys produces no edge. A tap that starts and ends within one frame yields
/// both edges. Returns whether the control is held now.
fn record_control(
    edges: &mut FrameEdges,
    keyboard: &ButtonInput<KeyCode>,
    keys: [KeyCode; 2],
    was_held: bool,
    engage: InputEdge,
    release: InputEdge,
) -> bool {
    let held = keyboard.any_pressed(keys);

    match (was_held, held) {
        (false, true) => edges.record(engage),
        (true, false) => edges.record(release),
        (false, false) if keyboard.any_just_pressed(keys) => {
            edges.record(engage);
            edges.record(release);
        }
        _ => {}
    }

    held
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis = x;

    let mut edges = FrameEdges::default();
    input.slide_held = record_control(
        &mut edges,
        &keyboard,
        SLIDE_KEYS,
        input.slide_held,
        InputEdge::SlideEngage,
        InputEdge::SlideRelease,
    );
    input.jump_held = record_control(
        &mut edges,
        &keyboard,
        JUMP_KEYS,
        input.jump_held,
        InputEdge::JumpEngage,
        InputEdge::JumpRelease,
    );
    input.edges = edges;
}
