//! Signs domain: readable signposts that pause movement while open.

mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod systems;


pub use components::{Sign, SignInteraction, SignReader};
pub use events::{SignClosed, SignOpened};

use bevy::prelude::*;

use crate::signs::systems::{attach_sign_reader, read_signs, track_sign_proximity};

pub struct SignsPlugin;

impl Plugin for SignsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SignOpened>()
            .add_message::<SignClosed>()
            .add_systems(
                Update,
                (attach_sign_reader, track_sign_proximity, read_signs).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_signpost);
    }
}
