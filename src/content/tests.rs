//! Content domain: unit tests for tuning parsing, validation and fallback.

use bevy::prelude::*;

use super::{
    ContentLoadError, TuningFile, load_tuning_file, parse_tuning, resolve_tuning, validate_tuning,
};
use crate::camera::CameraTuning;
use crate::movement::{MovementTuning, PlayerSpawn};

const FULL_FILE: &str = r#"
(
    schema_version: 1,
    movement: (
        max_grounded_speed: 6.0,
        max_sliding_speed: 40.0,
        sliding_acceleration: 15.0,
    ),
    camera: (
        offset: (0.0, 1.5),
        min_size: 4.0,
        max_size: 16.0,
        zoom_speed: 30.0,
    ),
    player: (
        spawn: (-2.0, 3.0),
        size: (0.8, 1.2),
    ),
    simulation: (
        fixed_hz: 60.0,
    ),
)
"#;

#[test]
fn test_parse_full_file() {
    let tuning = parse_tuning(FULL_FILE, "inline").expect("parses");

    assert_eq!(tuning.schema_version, 1);
    assert_eq!(tuning.movement.max_grounded_speed, 6.0);
    assert_eq!(tuning.camera.offset, [0.0, 1.5]);
    assert_eq!(tuning.player.size, [0.8, 1.2]);
    assert_eq!(tuning.simulation.fixed_hz, 60.0);
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_missing_sections_use_defaults() {
    let tuning = parse_tuning(
        "(schema_version: 1, movement: (max_sliding_speed: 30.0))",
        "inline",
    )
    .expect("parses");

    assert_eq!(tuning.movement.max_sliding_speed, 30.0);
    assert_eq!(tuning.movement.max_grounded_speed, 5.0);
    assert_eq!(tuning.camera, TuningFile::default().camera);
    assert_eq!(tuning.simulation.fixed_hz, 50.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(schema_version: )", "broken.ron").expect_err("rejects");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning_file(std::path::Path::new("does/not/exist.ron")).expect_err("missing");
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(super::TUNING_PATH);
    let tuning = load_tuning_file(&path).expect("shipped tuning loads");

    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(tuning, TuningFile::default());
}

// ----------------------------------------------------------------------------
// Validation
// ----------------------------------------------------------------------------

#[test]
fn test_defaults_are_valid() {
    assert!(validate_tuning(&TuningFile::default()).is_empty());
}

#[test]
fn test_validation_reports_every_error() {
    let mut tuning = TuningFile::default();
    tuning.movement.max_grounded_speed = 0.0;
    tuning.movement.sliding_acceleration = f32::NAN;
    tuning.player.size = [1.0, -1.0];
    tuning.simulation.fixed_hz = 0.0;

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| (e.section, e.field)).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&("movement", "max_grounded_speed")));
    assert!(fields.contains(&("movement", "sliding_acceleration")));
    assert!(fields.contains(&("player", "size.y")));
    assert!(fields.contains(&("simulation", "fixed_hz")));
}

#[test]
fn test_camera_range_must_not_invert() {
    let mut tuning = TuningFile::default();
    tuning.camera.max_size = 3.0;

    let errors = validate_tuning(&tuning);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "max_size");
    assert_eq!(
        errors[0].to_string(),
        "camera.max_size: must not be below min_size (3 < 5)"
    );
}

#[test]
fn test_schema_version_mismatch() {
    let tuning = TuningFile {
        schema_version: 7,
        ..TuningFile::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}

// ----------------------------------------------------------------------------
// Fallback & conversion
// ----------------------------------------------------------------------------

#[test]
fn test_load_failure_falls_back_to_defaults() {
    let resolved = resolve_tuning(Err(ContentLoadError {
        file: "tuning.ron".to_string(),
        message: "IO error: not found".to_string(),
    }));

    assert_eq!(resolved, TuningFile::default());
}

#[test]
fn test_invalid_tuning_falls_back_to_defaults() {
    let mut tuning = TuningFile::default();
    tuning.movement.max_sliding_speed = -1.0;
    tuning.camera.zoom_speed = 0.0;

    assert_eq!(resolve_tuning(Ok(tuning)), TuningFile::default());
}

#[test]
fn test_valid_tuning_is_kept() {
    let tuning = parse_tuning(FULL_FILE, "inline").expect("parses");
    assert_eq!(resolve_tuning(Ok(tuning.clone())), tuning);
}

#[test]
fn test_sections_convert_to_resources() {
    let tuning = parse_tuning(FULL_FILE, "inline").expect("parses");

    let movement = MovementTuning::from(&tuning.movement);
    assert_eq!(movement.max_grounded_speed, 6.0);
    assert_eq!(movement.max_sliding_speed, 40.0);
    assert_eq!(movement.sliding_acceleration, 15.0);

    let camera = CameraTuning::from(&tuning.camera);
    assert_eq!(camera.offset, Vec2::new(0.0, 1.5));
    assert_eq!(camera.max_size, 16.0);

    let spawn = PlayerSpawn::from(&tuning.player);
    assert_eq!(spawn.position, Vec2::new(-2.0, 3.0));
    assert_eq!(spawn.size, Vec2::new(0.8, 1.2));
}

#[test]
fn test_default_sections_match_runtime_defaults() {
    let tuning = TuningFile::default();

    assert_eq!(
        MovementTuning::from(&tuning.movement),
        MovementTuning::default()
    );
    assert_eq!(CameraTuning::from(&tuning.camera), CameraTuning::default());
    assert_eq!(PlayerSpawn::from(&tuning.player), PlayerSpawn::default());
}
