//! Signs domain: proximity tracking and the read key.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Body, MovementController, MovementStateChanged, Player, TransitionCause};
use crate::signs::{Sign, SignClosed, SignInteraction, SignOpened, SignReader};

pub(crate) const READ_KEY: KeyCode = KeyCode::KeyE;

/// Give every new player a reader so it can pick up nearby signs.
pub(crate) fn attach_sign_reader(
    mut commands: Commands,
    player_query: Query<Entity, (Added<Player>, Without<SignReader>)>,
) {
    for entity in &player_query {
        commands.entity(entity).insert(SignReader::default());
    }
}

pub(crate) fn track_sign_proximity(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    sign_query: Query<(), With<Sign>>,
    mut reader_query: Query<&mut SignReader, With<Player>>,
) {
    for event in collision_start_events.read() {
        let (sign, other) = if sign_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if sign_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if let Ok(mut reader) = reader_query.get_mut(other) {
            debug!("[SIGN] Player in range of sign {:?}", sign);
            reader.enter(sign);
        }
    }

    for event in collision_end_events.read() {
        let (sign, other) = if sign_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if sign_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if let Ok(mut reader) = reader_query.get_mut(other) {
            debug!("[SIGN] Player left range of sign {:?}", sign);
            reader.leave(sign);
        }
    }
}

pub(crate) fn read_signs(
    keyboard: Res<ButtonInput<KeyCode>>,
    sign_query: Query<&Sign>,
    mut reader_query: Query<
        (
            Entity,
            &mut SignReader,
            &mut MovementController,
            &mut Body,
        ),
        With<Player>,
    >,
    mut opened: MessageWriter<SignOpened>,
    mut closed: MessageWriter<SignClosed>,
    mut changes: MessageWriter<MovementStateChanged>,
) {
    if !keyboard.just_pressed(READ_KEY) {
        return;
    }

    for (entity, mut reader, mut controller, mut body) in &mut reader_query {
        let from = controller.state();

        match reader.toggle(&mut controller, &mut body) {
            SignInteraction::Opened(sign) => {
                let message = sign_query
                    .get(sign)
                    .map(|s| s.message.clone())
                    .unwrap_or_default();
                info!("[SIGN] Opened: \"{}\" (movement suspended)", message);
                opened.write(SignOpened {
                    reader: entity,
                    sign,
                    message,
                });
            }
            SignInteraction::Closed => {
                info!("[SIGN] Closed (movement resumed)");
                closed.write(SignClosed { reader: entity });
            }
            SignInteraction::Nothing => {}
        }

        let to = controller.state();
        if from != to {
            debug!("Movement {:?} -> {:?} on suspend", from, to);
            changes.write(MovementStateChanged {
                entity,
                from,
                to,
                cause: TransitionCause::Suspend,
            });
        }
    }
}
