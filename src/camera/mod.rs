//! Camera domain: follows the penguin and zooms out with sliding speed.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::movement::{Body, MovementController, Player};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraTuning {
    /// Added to the player position to get the camera center
    pub offset: Vec2,
    /// Orthographic half-height while standing
    pub min_size: f32,
    /// Orthographic half-height at full sliding zoom
    pub max_size: f32,
    /// Sliding speed at which the zoom reaches `max_size`
    pub zoom_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 2.0),
            min_size: 5.0,
            max_size: 20.0,
            zoom_speed: 50.0,
        }
    }
}

/// Where the camera sits and how much of the world it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub center: Vec2,
    pub half_height: f32,
}

/// Frame the player. Only the slide profile zooms out, proportionally to speed.
pub fn frame(tuning: &CameraTuning, position: Vec2, speed: f32, sliding: bool) -> CameraFrame {
    let half_height = if sliding && tuning.zoom_speed > 0.0 {
        let t = (speed / tuning.zoom_speed).clamp(0.0, 1.0);
        tuning.min_size + (tuning.max_size - tuning.min_size) * t
    } else {
        tuning.min_size
    };

    CameraFrame {
        center: position + tuning.offset,
        half_height,
    }
}

/// Marker for the follow camera
#[derive(Component, Debug)]
pub struct FollowCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player.before(TransformSystems::Propagate));
    }
}

fn orthographic(half_height: f32) -> Projection {
    Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical {
            viewport_height: half_height * 2.0,
        },
        ..OrthographicProjection::default_2d()
    })
}

fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        FollowCamera,
        Camera2d,
        orthographic(tuning.min_size),
        Transform::from_translation(tuning.offset.extend(0.0)),
    ));
}

fn follow_player(
    tuning: Res<CameraTuning>,
    player_query: Query<(&Transform, &Body, &MovementController), With<Player>>,
    mut camera_query: Query<
        (&mut Transform, &mut Projection),
        (With<FollowCamera>, Without<Player>),
    >,
) {
    let Ok((player_transform, body, controller)) = player_query.single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    let framed = frame(
        &tuning,
        player_transform.translation.truncate(),
        body.speed(),
        controller.in_slide_profile(),
    );

    transform.translation.x = framed.center.x;
    transform.translation.y = framed.center.y;

    if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: framed.half_height * 2.0,
        };
    }
}
