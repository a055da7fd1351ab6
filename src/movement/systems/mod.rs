//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_input_edges, step_movement, sync_body_to_physics, sync_sprite_to_body,
};
