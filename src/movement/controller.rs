//! Movement domain: the regime state machine driver.
//!
//! Input-driven and physics-driven transitions take separate paths:
//! [`MovementController::on_input_edge`] applies the edge transition table,
//! while [`MovementController::on_physics_tick`] runs the active regime's step
//! and adopts whatever regime it returns.

use bevy::prelude::*;

use crate::movement::body::Body;
use crate::movement::regimes::{
    MovementState, Regime, STAND_PROFILE_SCALE, StepContext, anticipate_land, flying, grounded,
    jumping, sliding,
};
use crate::movement::resources::InputEdge;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementController {
    regime: Regime,
    suspended: bool,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            regime: Regime::Grounded,
            suspended: false,
        }
    }
}

impl MovementController {
    #[cfg(test)]
    pub(crate) fn in_regime(regime: Regime) -> Self {
        Self {
            regime,
            suspended: false,
        }
    }

    pub fn state(&self) -> MovementState {
        self.regime.state()
    }

    pub fn regime(&self) -> &Regime {
        &self.regime
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn in_slide_profile(&self) -> bool {
        self.state().in_slide_profile()
    }

    /// Apply one edge event. Pairs missing from the transition table are no-ops.
    pub fn on_input_edge(&mut self, edge: InputEdge, body: &mut Body) -> MovementState {
        if self.suspended {
            return self.state();
        }

        let next = match (self.state(), edge) {
            (MovementState::Grounded, InputEdge::SlideEngage) => grounded::enter_flying(body),
            (MovementState::AnticipateLand, InputEdge::SlideEngage) => {
                anticipate_land::enter_flying(body)
            }
            (MovementState::Flying, InputEdge::SlideRelease) => MovementState::AnticipateLand,
            (MovementState::Sliding, InputEdge::SlideRelease) => sliding::enter_grounded(body),
            (MovementState::Sliding, InputEdge::JumpEngage) => sliding::enter_flying(body),
            (current, _) => current,
        };

        self.adopt(next);
        next
    }

    /// Run the active regime for one fixed step.
    pub fn on_physics_tick(
        &mut self,
        ctx: &mut StepContext,
        delta: f32,
        horizontal_axis: f32,
    ) -> MovementState {
        let horizontal_axis = if self.suspended {
            0.0
        } else {
            horizontal_axis.clamp(-1.0, 1.0)
        };

        let next = match &mut self.regime {
            Regime::Grounded => grounded::step(ctx, horizontal_axis),
            Regime::Sliding => sliding::step(ctx, delta),
            Regime::Jumping => jumping::step(ctx),
            Regime::Flying => flying::step(ctx),
            Regime::AnticipateLand => anticipate_land::step(ctx),
            Regime::Landing(timer) => timer.step(ctx.body, delta),
        };

        self.adopt(next);
        next
    }

    /// Stop reacting to input, standing the body up first if it is tucked.
    pub fn suspend(&mut self, body: &mut Body) {
        if self.in_slide_profile() {
            body.scale_height(STAND_PROFILE_SCALE);
            body.reset_up();
            self.regime = Regime::Grounded;
        }
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Switch regimes only on an actual change so regime-owned state such as
    /// the landing timer survives ticks that stay put.
    fn adopt(&mut self, next: MovementState) {
        if next != self.state() {
            self.regime = Regime::enter(next);
        }
    }
}
