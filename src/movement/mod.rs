//! Movement domain: penguin locomotion plugin wiring and public exports.
//!
//! The regime state machine in [`controller`] and [`regimes`] works on plain
//! values; the systems in [`systems`] bind it to the ECS and avian2d.

mod body;
mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
pub mod probe;
pub mod regimes;
mod resources;
mod systems;


pub use body::Body;
pub use components::{GameLayer, Ground, Player};
pub use controller::MovementController;
pub use events::{MovementStateChanged, TransitionCause};
pub use regimes::{LandingTimer, MovementState, Regime, StepContext};
pub use resources::{FrameEdges, InputEdge, MovementInput, MovementTuning, PlayerSpawn};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_input_edges, read_input, step_movement, sync_body_to_physics, sync_sprite_to_body,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<PlayerSpawn>()
            .add_message::<MovementStateChanged>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                PreUpdate,
                (read_input, apply_input_edges)
                    .chain()
                    .after(InputSystems),
            )
            .add_systems(FixedUpdate, (step_movement, sync_body_to_physics).chain())
            .add_systems(Update, sync_sprite_to_body);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_level);
    }
}
