//! Command-line front end for `unipack-config`.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`error`] - CLI error type and miette reporting
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
