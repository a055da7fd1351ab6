//! Movement domain: debug-only test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

fn spawn_ground_block(
    commands: &mut Commands,
    color: Color,
    center: Vec2,
    size: Vec2,
    angle_degrees: f32,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0))
            .with_rotation(Quat::from_rotation_z(angle_degrees.to_radians())),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(0.0),
        ground_layers,
    ));
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.85, 0.9, 0.95);
    let slope_color = Color::srgb(0.7, 0.82, 0.92);
    let ramp_color = Color::srgb(0.6, 0.72, 0.85);

    // Starting plateau
    spawn_ground_block(
        &mut commands,
        ground_color,
        Vec2::new(-5.0, -0.5),
        Vec2::new(20.0, 1.0),
        0.0,
    );

    // Long downhill run for sliding
    let slope_angle: f32 = -20.0;
    let slope_length = 40.0;
    let slope_start = Vec2::new(5.0, 0.0);
    let slope_dir = Vec2::from_angle(slope_angle.to_radians());
    let slope_center = slope_start + slope_dir * (slope_length * 0.5)
        - slope_dir.perp() * 0.5;
    spawn_ground_block(
        &mut commands,
        slope_color,
        slope_center,
        Vec2::new(slope_length, 1.0),
        slope_angle,
    );

    // Runout at the bottom of the hill
    let slope_end = slope_start + slope_dir * slope_length;
    spawn_ground_block(
        &mut commands,
        ground_color,
        Vec2::new(slope_end.x + 15.0, slope_end.y - 0.5),
        Vec2::new(30.0, 1.0),
        0.0,
    );

    // Kicker ramp to launch dives off
    spawn_ground_block(
        &mut commands,
        ramp_color,
        Vec2::new(slope_end.x + 25.0, slope_end.y + 0.3),
        Vec2::new(4.0, 0.5),
        15.0,
    );

    info!("Spawned test level");
}
