//! Movement domain: messages describing regime changes.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::regimes::MovementState;

/// What drove a regime change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCause {
    /// A button edge matched the transition table
    Input,
    /// The active regime's fixed step returned a different regime
    Physics,
    /// An outside collaborator suspended the controller
    Suspend,
}

/// Fired whenever a controller switches regime
#[derive(Debug)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
    pub cause: TransitionCause,
}

impl Message for MovementStateChanged {}
