//! Error types for settings loading and axis parsing.
//!
//! Tree generation itself never fails; these errors only surface at the
//! edges where values enter the crate.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Axis parsing errors (strict `FromStr`)
    #[error("unknown build target: {0:?} (expected \"server\" or \"client\")")]
    UnknownTarget(String),

    #[error("unknown build flavor: {0:?} (expected \"development\" or \"production\")")]
    UnknownFlavor(String),

    // Project root errors
    #[error("project root must be an absolute path: {}", .0.display())]
    RelativeRoot(PathBuf),

    // Settings loading errors
    #[error("invalid settings: {0}")]
    Settings(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Settings(err.to_string())
    }
}
