//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON source. `file` is only used for error context.
pub fn parse_tuning(source: &str, file: &str) -> Result<TuningFile, ContentLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the tuning file from disk.
pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}
