//! Validation for values in the tuning file.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:expr, $value:expr) => {
        let value = $value;
        if !value.is_finite() || value <= 0.0 {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be a finite value above zero, got {}", value),
            });
        }
    };
}

/// Helper macro for checking a value is finite
macro_rules! check_finite {
    ($errors:expr, $section:expr, $field:expr, $value:expr) => {
        let value = $value;
        if !value.is_finite() {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be finite, got {}", value),
            });
        }
    };
}

/// Validate every section of the tuning file.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tuning.schema_version != TUNING_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "tuning",
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                TUNING_SCHEMA_VERSION, tuning.schema_version
            ),
        });
    }

    // Movement
    let movement = &tuning.movement;
    check_positive!(
        errors,
        "movement",
        "max_grounded_speed",
        movement.max_grounded_speed
    );
    check_positive!(
        errors,
        "movement",
        "max_sliding_speed",
        movement.max_sliding_speed
    );
    check_positive!(
        errors,
        "movement",
        "sliding_acceleration",
        movement.sliding_acceleration
    );

    // Camera
    let camera = &tuning.camera;
    check_finite!(errors, "camera", "offset.x", camera.offset[0]);
    check_finite!(errors, "camera", "offset.y", camera.offset[1]);
    check_positive!(errors, "camera", "min_size", camera.min_size);
    check_positive!(errors, "camera", "max_size", camera.max_size);
    check_positive!(errors, "camera", "zoom_speed", camera.zoom_speed);
    if camera.max_size < camera.min_size {
        errors.push(ValidationError {
            section: "camera",
            field: "max_size",
            message: format!(
                "must not be below min_size ({} < {})",
                camera.max_size, camera.min_size
            ),
        });
    }

    // Player
    let player = &tuning.player;
    check_finite!(errors, "player", "spawn.x", player.spawn[0]);
    check_finite!(errors, "player", "spawn.y", player.spawn[1]);
    check_positive!(errors, "player", "size.x", player.size[0]);
    check_positive!(errors, "player", "size.y", player.size[1]);

    // Simulation
    check_positive!(
        errors,
        "simulation",
        "fixed_hz",
        tuning.simulation.fixed_hz
    );

    errors
}
