//! Signs domain: debug-only signpost for the test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::signs::Sign;

pub(crate) fn spawn_test_signpost(mut commands: Commands) {
    // On the starting plateau
    commands.spawn((
        Sign {
            message: "Hold S to dive, release to stand. Let the hill do the work!".to_string(),
        },
        Sprite {
            color: Color::srgb(0.55, 0.4, 0.25),
            custom_size: Some(Vec2::new(0.6, 1.2)),
            ..default()
        },
        Transform::from_xyz(-3.0, 0.6, -0.5),
        RigidBody::Static,
        Collider::rectangle(1.5, 1.2),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
