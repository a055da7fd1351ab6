//! Diving through the air nose-first.

use super::{MovementState, StepContext};

pub fn step(ctx: &mut StepContext) -> MovementState {
    // Touching down while still tucked turns into a slide.
    if !ctx.contacts.is_empty() {
        return MovementState::Sliding;
    }

    let velocity = ctx.body.velocity;
    ctx.body.set_up(velocity);

    MovementState::Flying
}
