//! Signs domain: signpost and reader components.

use bevy::prelude::*;

use crate::movement::{Body, MovementController};

/// A readable signpost. Lives on a sensor collider.
#[derive(Component, Debug, Clone)]
pub struct Sign {
    pub message: String,
}

/// Outcome of pressing the read key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInteraction {
    Opened(Entity),
    Closed,
    Nothing,
}

/// Tracks which sign (if any) the player can read and whether one is open.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct SignReader {
    pub nearby: Option<Entity>,
    pub reading: bool,
}

impl SignReader {
    pub fn enter(&mut self, sign: Entity) {
        self.nearby = Some(sign);
    }

    /// Forget `sign` if it is the one in range. An open sign stays open.
    pub fn leave(&mut self, sign: Entity) {
        if self.nearby == Some(sign) {
            self.nearby = None;
        }
    }

    /// Open the nearby sign, or close the open one.
    ///
    /// Opening suspends the movement controller and closing resumes it.
    pub fn toggle(
        &mut self,
        controller: &mut MovementController,
        body: &mut Body,
    ) -> SignInteraction {
        if self.reading {
            self.reading = false;
            controller.resume();
            return SignInteraction::Closed;
        }

        let Some(sign) = self.nearby else {
            return SignInteraction::Nothing;
        };

        controller.suspend(body);
        self.reading = true;
        SignInteraction::Opened(sign)
    }
}
