//! Signs domain: messages for opening and closing signs.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct SignOpened {
    pub reader: Entity,
    pub sign: Entity,
    pub message: String,
}

impl Message for SignOpened {}

#[derive(Debug)]
pub struct SignClosed {
    pub reader: Entity,
}

impl Message for SignClosed {}
