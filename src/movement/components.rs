//! Movement domain: components and physics layers for the controlled body.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces probed by the controller (floors, slopes, ramps)
    Ground,
    /// The controlled penguin
    Player,
    /// Trigger volumes (signposts) - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
