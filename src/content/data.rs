//! Data definitions for the RON tuning file.
//!
//! These structs mirror the structure of assets/data/tuning.ron. Every section
//! falls back to its built-in defaults when omitted from the file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::movement::{MovementTuning, PlayerSpawn};

pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root (tuning.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementDef,
    #[serde(default)]
    pub camera: CameraDef,
    #[serde(default)]
    pub player: PlayerDef,
    #[serde(default)]
    pub simulation: SimulationDef,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementDef::default(),
            camera: CameraDef::default(),
            player: PlayerDef::default(),
            simulation: SimulationDef::default(),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementDef {
    pub max_grounded_speed: f32,
    pub max_sliding_speed: f32,
    pub sliding_acceleration: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            max_grounded_speed: 5.0,
            max_sliding_speed: 50.0,
            sliding_acceleration: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CameraDef {
    pub offset: [f32; 2],
    /// Orthographic half-height while standing
    pub min_size: f32,
    /// Orthographic half-height at full sliding zoom
    pub max_size: f32,
    /// Speed at which the zoom reaches `max_size`
    pub zoom_speed: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            offset: [0.0, 2.0],
            min_size: 5.0,
            max_size: 20.0,
            zoom_speed: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlayerDef {
    pub spawn: [f32; 2],
    pub size: [f32; 2],
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            spawn: [0.0, 2.0],
            size: [1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SimulationDef {
    /// Fixed physics tick rate
    pub fixed_hz: f64,
}

impl Default for SimulationDef {
    fn default() -> Self {
        Self { fixed_hz: 50.0 }
    }
}

// ============================================================================
// Conversions into runtime resources
// ============================================================================

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            max_grounded_speed: def.max_grounded_speed,
            max_sliding_speed: def.max_sliding_speed,
            sliding_acceleration: def.sliding_acceleration,
        }
    }
}

impl From<&CameraDef> for CameraTuning {
    fn from(def: &CameraDef) -> Self {
        Self {
            offset: Vec2::from_array(def.offset),
            min_size: def.min_size,
            max_size: def.max_size,
            zoom_speed: def.zoom_speed,
        }
    }
}

impl From<&PlayerDef> for PlayerSpawn {
    fn from(def: &PlayerDef) -> Self {
        Self {
            position: Vec2::from_array(def.spawn),
            size: Vec2::from_array(def.size),
        }
    }
}
