//! Command-line interface definition for unipack.
//!
//! The CLI structure is declared with clap's derive macros. Axis flags are
//! closed `ValueEnum`s, so a mistyped `--target` fails at parse time, while
//! the same typo in `BUILD_TYPE` is clamped with a warning.
//!
//! # Command Structure
//!
//! - `unipack generate` - print one configuration tree
//! - `unipack registry` - print the default tree plus all four named trees
//! - `unipack classify` - run the externals predicate on one dependency
//!
//! # Environment Variables
//!
//! - `BUILD_TYPE`: target used when `--target` is omitted (`server` / `client`)
//! - `NODE_ENV`: flavor used when `--flavor` is omitted (`development` / `production`)
//! - `APP_ROOT_PATH`: absolute project root used when `--root` is omitted
//! - `RUST_LOG`: log filter when neither `--verbose` nor `--quiet` is given

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{ClassifyArgs, Command, GenerateArgs, RegistryArgs};
pub use enums::*;

/// unipack - bundler configuration for isomorphic apps
#[derive(Parser, Debug)]
#[command(
    name = "unipack",
    version,
    about = "Generate bundler configuration for isomorphic apps",
    long_about = "unipack generates bundler configuration trees for server and client builds\n\
                  in development and production flavors from a single definition.\n\
                  BUILD_TYPE and NODE_ENV select the axes when flags are omitted."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows how each axis was resolved, the discovered project root and
    /// one event per generated tree.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Hides clamp warnings for unrecognized BUILD_TYPE / NODE_ENV values.
    /// The generated JSON on stdout is unaffected.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Writes log lines without ANSI color codes. NO_COLOR has the same
    /// effect.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
