//! Ballistic flight; gravity and impulses come from the physics service.

use super::{MovementState, StepContext};

pub fn step(ctx: &mut StepContext) -> MovementState {
    if !ctx.contacts.is_empty() {
        return MovementState::Grounded;
    }
    MovementState::Jumping
}
