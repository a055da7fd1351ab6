//! Airborne after releasing the slide: the next contact is a landing.

use super::{MovementState, StepContext};
use crate::movement::body::Body;

/// Fraction of horizontal speed kept when diving again before touching down.
pub const RECOVERY_DAMPING: f32 = 0.6;

pub fn step(ctx: &mut StepContext) -> MovementState {
    if !ctx.contacts.is_empty() {
        return MovementState::Landing;
    }

    let velocity = ctx.body.velocity;
    ctx.body.set_up(velocity);

    MovementState::AnticipateLand
}

pub fn enter_flying(body: &mut Body) -> MovementState {
    body.velocity.x *= RECOVERY_DAMPING;

    MovementState::Flying
}
