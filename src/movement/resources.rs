//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Immutable movement constants shared by the Grounded and Sliding regimes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// Speed along the ground tangent at full horizontal input
    pub max_grounded_speed: f32,
    /// Slide acceleration stops once the body is at least this fast
    pub max_sliding_speed: f32,
    /// Scales the slope-driven acceleration while sliding
    pub sliding_acceleration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_grounded_speed: 5.0,
            max_sliding_speed: 50.0,
            sliding_acceleration: 20.0,
        }
    }
}

/// Discrete button transitions the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEdge {
    SlideEngage,
    SlideRelease,
    JumpEngage,
    JumpRelease,
}

/// Edges captured during one rendered frame.
///
/// Iteration always yields slide edges before jump edges, regardless of the
/// order the keys were observed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEdges {
    pub slide_engage: bool,
    pub slide_release: bool,
    pub jump_engage: bool,
    pub jump_release: bool,
}

impl FrameEdges {
    pub fn record(&mut self, edge: InputEdge) {
        match edge {
            InputEdge::SlideEngage => self.slide_engage = true,
            InputEdge::SlideRelease => self.slide_release = true,
            InputEdge::JumpEngage => self.jump_engage = true,
            InputEdge::JumpRelease => self.jump_release = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.slide_engage || self.slide_release || self.jump_engage || self.jump_release)
    }

    pub fn iter(&self) -> impl Iterator<Item = InputEdge> + use<> {
        [
            (self.slide_engage, InputEdge::SlideEngage),
            (self.slide_release, InputEdge::SlideRelease),
            (self.jump_engage, InputEdge::JumpEngage),
            (self.jump_release, InputEdge::JumpRelease),
        ]
        .into_iter()
        .filter_map(|(fired, edge)| fired.then_some(edge))
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub axis: f32,
    pub edges: FrameEdges,
    /// Whether any slide key was down last frame
    pub slide_held: bool,
    /// Whether any jump key was down last frame
    pub jump_held: bool,
}

/// Where and how large the penguin is spawned.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerSpawn {
    pub position: Vec2,
    /// Standing collider width and height
    pub size: Vec2,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 2.0),
            size: Vec2::new(1.0, 1.0),
        }
    }
}
