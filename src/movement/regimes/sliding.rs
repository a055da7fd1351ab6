//! Belly sliding: slope steepness accelerates the body, which lies headfirst
//! along the surface.

use bevy::prelude::*;

use super::{MovementState, STAND_PROFILE_SCALE, StepContext};
use crate::movement::GameLayer;
use crate::movement::body::Body;
use crate::movement::probe::UNBOUNDED;

pub fn step(ctx: &mut StepContext, delta: f32) -> MovementState {
    if ctx.contacts.is_empty() {
        return MovementState::Flying;
    }

    let Some(normal) = ctx
        .ground
        .cast_ray(
            ctx.body.position,
            Dir2::NEG_Y,
            UNBOUNDED,
            GameLayer::Ground.into(),
        )
        .surface_normal()
    else {
        return MovementState::Sliding;
    };

    if ctx.body.speed() < ctx.tuning.max_sliding_speed {
        let up = ctx.body.up();
        ctx.body.velocity += ctx.tuning.sliding_acceleration * normal.x * delta * up;
    }

    ctx.body.set_right(-normal);

    MovementState::Sliding
}

/// Jumping out of a slide keeps the slide profile; nothing to undo.
pub fn enter_flying(_body: &mut Body) -> MovementState {
    MovementState::Flying
}

/// Stand back up: restore the collider height and face world-up.
pub fn enter_grounded(body: &mut Body) -> MovementState {
    body.scale_height(STAND_PROFILE_SCALE);
    body.reset_up();

    MovementState::Grounded
}
