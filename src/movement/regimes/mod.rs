//! Movement domain: the six movement regimes.
//!
//! Each regime module exposes a `step` function that applies its kinematic rule
//! to the [`Body`] and returns the regime to run on the next tick, plus the
//! `enter_*` actions the controller invokes for input-driven transitions.
//! Regimes never call each other; the controller owns dispatch.

pub mod anticipate_land;
pub mod flying;
pub mod grounded;
pub mod jumping;
pub mod landing;
pub mod sliding;

pub use landing::LandingTimer;

use crate::movement::body::Body;
use crate::movement::probe::{ContactSet, GroundQuery};
use crate::movement::resources::MovementTuning;

/// Collider height multiplier applied when tucking into the slide profile.
pub const SLIDE_PROFILE_SCALE: f32 = 0.1;

/// Inverse of [`SLIDE_PROFILE_SCALE`], applied when standing back up.
pub const STAND_PROFILE_SCALE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Grounded,
    Sliding,
    Jumping,
    Flying,
    AnticipateLand,
    Landing,
}

impl MovementState {
    /// Regimes that run with the shrunken slide collider.
    pub fn in_slide_profile(self) -> bool {
        matches!(
            self,
            MovementState::Flying
                | MovementState::Sliding
                | MovementState::AnticipateLand
                | MovementState::Landing
        )
    }
}

/// The active regime together with any state only that regime owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    Grounded,
    Sliding,
    Jumping,
    Flying,
    AnticipateLand,
    Landing(LandingTimer),
}

impl Regime {
    /// Build the regime for `state`, starting any regime-owned state fresh.
    pub fn enter(state: MovementState) -> Self {
        match state {
            MovementState::Grounded => Regime::Grounded,
            MovementState::Sliding => Regime::Sliding,
            MovementState::Jumping => Regime::Jumping,
            MovementState::Flying => Regime::Flying,
            MovementState::AnticipateLand => Regime::AnticipateLand,
            MovementState::Landing => Regime::Landing(LandingTimer::default()),
        }
    }

    pub fn state(&self) -> MovementState {
        match self {
            Regime::Grounded => MovementState::Grounded,
            Regime::Sliding => MovementState::Sliding,
            Regime::Jumping => MovementState::Jumping,
            Regime::Flying => MovementState::Flying,
            Regime::AnticipateLand => MovementState::AnticipateLand,
            Regime::Landing(_) => MovementState::Landing,
        }
    }
}

/// Everything a regime may read or mutate during one physics step.
pub struct StepContext<'a> {
    pub body: &'a mut Body,
    pub contacts: &'a ContactSet,
    pub ground: &'a dyn GroundQuery,
    pub tuning: &'a MovementTuning,
}
