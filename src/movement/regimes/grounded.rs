//! Walking: velocity follows the slope just ahead of the body.

use bevy::prelude::*;

use super::{MovementState, SLIDE_PROFILE_SCALE, StepContext};
use crate::movement::GameLayer;
use crate::movement::body::Body;
use crate::movement::probe::UNBOUNDED;

/// How far ahead (per unit of input, along both axes) the slope is probed.
pub const LOOKAHEAD: f32 = 0.5;

/// Upward kick applied when diving into a slide.
pub const DIVE_IMPULSE: Vec2 = Vec2::new(0.0, 2.0);

pub fn step(ctx: &mut StepContext, horizontal_axis: f32) -> MovementState {
    // Walked off an edge.
    if ctx.contacts.is_empty() {
        return MovementState::Jumping;
    }

    let origin = ctx.body.position + LOOKAHEAD * horizontal_axis * Vec2::ONE;
    let normal = ctx
        .ground
        .cast_ray(origin, Dir2::NEG_Y, UNBOUNDED, GameLayer::Ground.into())
        .surface_normal()
        .unwrap_or(Vec2::Y);

    let tangent = Vec2::new(normal.y, -normal.x);
    ctx.body.velocity = horizontal_axis * ctx.tuning.max_grounded_speed * tangent;

    MovementState::Grounded
}

/// Tuck into the slide profile and hop forward into a dive.
pub fn enter_flying(body: &mut Body) -> MovementState {
    body.scale_height(SLIDE_PROFILE_SCALE);
    body.velocity += DIVE_IMPULSE;

    MovementState::Flying
}
