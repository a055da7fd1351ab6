//! Movement domain: the kinematic handle regimes mutate during a step.

use bevy::prelude::*;

/// Controller-side view of the physics body.
///
/// Position and velocity are mirrored from the rigid body before each step and
/// velocity is written back afterwards. Orientation and collider extents are
/// owned here and pushed to the physics service by `sync_body_to_physics`.
///
/// The orientation is stored as an `up`/`right` pair that is kept unit length
/// and perpendicular: setting one always re-derives the other.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Full collider width and height
    pub extents: Vec2,
    up: Vec2,
    right: Vec2,
}

impl Body {
    pub fn new(position: Vec2, extents: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            extents,
            up: Vec2::Y,
            right: Vec2::X,
        }
    }

    pub fn up(&self) -> Vec2 {
        self.up
    }

    pub fn right(&self) -> Vec2 {
        self.right
    }

    /// Point the body's up-axis along `direction`.
    ///
    /// A zero (or non-finite) direction leaves the basis untouched.
    pub fn set_up(&mut self, direction: Vec2) {
        let Some(up) = direction.try_normalize() else {
            return;
        };
        self.up = up;
        self.right = Vec2::new(up.y, -up.x);
    }

    /// Point the body's right-axis along `direction`.
    ///
    /// A zero (or non-finite) direction leaves the basis untouched.
    pub fn set_right(&mut self, direction: Vec2) {
        let Some(right) = direction.try_normalize() else {
            return;
        };
        self.right = right;
        self.up = Vec2::new(-right.y, right.x);
    }

    pub fn reset_up(&mut self) {
        self.set_up(Vec2::Y);
    }

    /// Counter-clockwise angle from world-up to the body's up-axis, in radians.
    pub fn angle(&self) -> f32 {
        (-self.up.x).atan2(self.up.y)
    }

    pub fn scale_height(&mut self, factor: f32) {
        self.extents.y *= factor;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
