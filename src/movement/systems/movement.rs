//! Movement domain: controller dispatch and physics write-back.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::probe::{SpatialGroundQuery, gather_contacts};
use crate::movement::{
    Body, MovementController, MovementInput, MovementStateChanged, MovementTuning, Player,
    StepContext, TransitionCause,
};

/// Extents below this difference are treated as unchanged.
const EXTENT_EPSILON: f32 = 1e-4;

/// Runs in PreUpdate so a frame's edges land before that frame's fixed steps.
pub(crate) fn apply_input_edges(
    input: Res<MovementInput>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut Body,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut changes: MessageWriter<MovementStateChanged>,
) {
    if input.edges.is_empty() {
        return;
    }

    for (entity, mut controller, mut body, mut velocity) in &mut query {
        body.velocity = velocity.0;

        for edge in input.edges.iter() {
            let from = controller.state();
            let to = controller.on_input_edge(edge, &mut body);
            if from != to {
                debug!("Movement {:?} -> {:?} on {:?}", from, to, edge);
                changes.write(MovementStateChanged {
                    entity,
                    from,
                    to,
                    cause: TransitionCause::Input,
                });
            }
        }

        velocity.0 = body.velocity;
    }
}

pub(crate) fn step_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    collisions: Collisions,
    sensors: Query<(), With<Sensor>>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut Body,
            &Position,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut changes: MessageWriter<MovementStateChanged>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut body, position, mut velocity) in &mut query {
        body.position = position.0;
        body.velocity = velocity.0;

        let contacts = gather_contacts(&collisions, &sensors, entity);
        let ground = SpatialGroundQuery::new(&spatial_query, entity);

        let from = controller.state();
        let to = {
            let mut ctx = StepContext {
                body: &mut *body,
                contacts: &contacts,
                ground: &ground,
                tuning: &*tuning,
            };
            controller.on_physics_tick(&mut ctx, dt, input.axis)
        };

        trace!(
            "Step: state={:?}, contacts={}, vel=({:.2}, {:.2})",
            to,
            contacts.len(),
            body.velocity.x,
            body.velocity.y
        );

        if from != to {
            debug!("Movement {:?} -> {:?}", from, to);
            changes.write(MovementStateChanged {
                entity,
                from,
                to,
                cause: TransitionCause::Physics,
            });
        }

        velocity.0 = body.velocity;
    }
}

/// Push orientation and collider extents owned by [`Body`] to the rigid body.
pub(crate) fn sync_body_to_physics(
    mut query: Query<(&Body, &mut Rotation, &mut Collider), (With<Player>, Changed<Body>)>,
) {
    for (body, mut rotation, mut collider) in &mut query {
        let angle = body.angle();
        if (rotation.as_radians() - angle).abs() > f32::EPSILON {
            *rotation = Rotation::radians(angle);
        }

        let current = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y) * 2.0,
            None => Vec2::ZERO,
        };
        if (current - body.extents).abs().max_element() > EXTENT_EPSILON {
            debug!(
                "Collider resized: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                current.x, current.y, body.extents.x, body.extents.y
            );
            *collider = Collider::rectangle(body.extents.x, body.extents.y);
        }
    }
}

/// Keep the placeholder sprite the same shape as the collider.
pub(crate) fn sync_sprite_to_body(
    mut query: Query<(&Body, &mut Sprite), (With<Player>, Changed<Body>)>,
) {
    for (body, mut sprite) in &mut query {
        if sprite.custom_size != Some(body.extents) {
            sprite.custom_size = Some(body.extents);
        }
    }
}
