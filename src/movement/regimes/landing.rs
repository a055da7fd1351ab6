//! Landing lag: a fixed dwell before the body stands back up, independent of
//! what the contacts do in the meantime.

use super::{MovementState, STAND_PROFILE_SCALE};
use crate::movement::body::Body;

/// Seconds spent in Landing; the transition fires once elapsed time exceeds it.
pub const LANDING_DWELL: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandingTimer {
    pub(crate) elapsed: f32,
}

impl LandingTimer {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn step(&mut self, body: &mut Body, delta: f32) -> MovementState {
        self.elapsed += delta;

        if self.elapsed > LANDING_DWELL {
            return self.enter_grounded(body);
        }

        MovementState::Landing
    }

    fn enter_grounded(&mut self, body: &mut Body) -> MovementState {
        body.scale_height(STAND_PROFILE_SCALE);
        body.reset_up();
        self.elapsed = 0.0;

        MovementState::Grounded
    }
}
