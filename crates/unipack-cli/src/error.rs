//! Error handling for the unipack CLI.
//!
//! Errors are `thiserror` enums. Library errors convert into [`CliError`]
//! via `#[from]`, and `main` reports them through miette with a hint naming
//! the flag or environment variable to fix.
//!
//! # Example
//!
//! ```rust,no_run
//! use unipack_cli::error::{Result, cli_error_to_miette};
//! use unipack_config::{ProjectRoot, Settings};
//!
//! fn settings() -> Result<Settings> {
//!     Ok(Settings::new(ProjectRoot::new("/srv/app")?))
//! }
//!
//! if let Err(err) = settings() {
//!     eprintln!("{:?}", cli_error_to_miette(err));
//! }
//! ```

use miette::Report;
use thiserror::Error;
use unipack_config::ConfigError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
///
/// Returned by every command. Generation itself never fails; errors come
/// from loading settings and writing JSON.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings or axis errors from the generator
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (working directory, path resolution)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a [`CliError`] into a miette [`Report`] for display.
///
/// Settings errors get a hint naming `--root`, `APP_ROOT_PATH`, `BUILD_TYPE`
/// or `NODE_ENV`; everything else keeps its message.
///
/// # Arguments
///
/// * `err` - The error returned by a command
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::RelativeRoot(path)) => miette::miette!(
            "Project root must be absolute: {}\n\nHint: pass --root or set APP_ROOT_PATH to an absolute path",
            path.display()
        ),
        CliError::Config(ConfigError::Settings(message)) => miette::miette!(
            "Invalid settings: {}\n\nHint: check BUILD_TYPE, NODE_ENV and APP_ROOT_PATH",
            message
        ),
        _ => miette::miette!("{}", err),
    }
}
