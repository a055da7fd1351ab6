//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Body, GameLayer, MovementController, Player, PlayerSpawn};

/// Spawn the penguin with its controller. Runs once at startup, after the
/// tuning file has been applied.
pub(crate) fn spawn_player(
    mut commands: Commands,
    spawn: Res<PlayerSpawn>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player at ({:.1}, {:.1}) with size {:.2}x{:.2}",
        spawn.position.x, spawn.position.y, spawn.size.x, spawn.size.y
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController::default(),
            Body::new(spawn.position, spawn.size),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.12, 0.12, 0.16),
            custom_size: Some(spawn.size),
            ..default()
        },
        Transform::from_translation(spawn.position.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(spawn.size.x, spawn.size.y),
            // Orientation is owned by the controller
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}
