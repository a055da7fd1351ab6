//! Headless apps shared by the domain tests.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::movement::{GameLayer, Ground, MovementState, MovementStateChanged, TransitionCause};

pub(crate) const TICK_HZ: f64 = 60.0;

/// A `MinimalPlugins` app running avian2d with one fixed step per update.
pub(crate) fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::transform::TransformPlugin)
        .add_plugins(bevy::asset::AssetPlugin::default())
        .add_plugins(bevy::scene::ScenePlugin)
        .add_plugins(bevy::diagnostic::DiagnosticsPlugin)
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_HZ,
        )));
    app.init_resource::<avian2d::collision::CollisionDiagnostics>()
        .init_resource::<avian2d::dynamics::solver::SolverDiagnostics>()
        .init_resource::<avian2d::spatial_query::SpatialQueryDiagnostics>();
    app.finish();
    app.cleanup();
    app
}

/// Spawn a static ground slab whose top surface sits at `top`.
pub(crate) fn spawn_floor(app: &mut App, top: f32) -> Entity {
    app.world_mut()
        .spawn((
            Ground,
            Transform::from_xyz(0.0, top - 0.5, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 1.0),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn run(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}

/// Regime changes seen so far, in publication order.
#[derive(Resource, Debug, Default)]
pub(crate) struct RecordedChanges(pub Vec<(MovementState, MovementState, TransitionCause)>);

pub(crate) fn record_changes(
    mut changes: MessageReader<MovementStateChanged>,
    mut recorded: ResMut<RecordedChanges>,
) {
    for change in changes.read() {
        recorded.0.push((change.from, change.to, change.cause));
    }
}
