use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available unipack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the configuration tree for one target and flavor
    ///
    /// Flags win over BUILD_TYPE / NODE_ENV; without either the tree is
    /// generated for server/production.
    Generate(GenerateArgs),

    /// Print the default tree with the production and development groups
    ///
    /// The default tree sits at the top level; `production` and
    /// `development` each hold a `server` and a `client` tree.
    Registry(RegistryArgs),

    /// Classify a dependency as bundled or external
    ///
    /// Runs the externals predicate of the selected target. Client builds
    /// bundle everything.
    Classify(ClassifyArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Build target (falls back to BUILD_TYPE, then server)
    #[arg(short, long, value_enum)]
    pub target: Option<TargetArg>,

    /// Build flavor (falls back to NODE_ENV, then production)
    #[arg(short, long, value_enum)]
    pub flavor: Option<FlavorArg>,

    /// Project root (falls back to APP_ROOT_PATH, then discovery from the
    /// working directory)
    ///
    /// Relative paths are made absolute against the working directory.
    /// Discovery picks the directory above the outermost node_modules, or the
    /// nearest ancestor holding a package.json.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print single-line JSON
    ///
    /// Pretty-printed JSON is the default.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the registry command
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Project root (falls back to APP_ROOT_PATH, then discovery from the
    /// working directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Dependency specifier as written in the import
    ///
    /// Specifiers starting with '.' are relative and stay bundled for the
    /// server; anything else is left to the runtime.
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// Directory of the importing module
    ///
    /// Any module under a node_modules directory is external on the server.
    #[arg(long, value_name = "DIR")]
    pub dir: String,

    /// Build target (falls back to BUILD_TYPE, then server)
    #[arg(short, long, value_enum)]
    pub target: Option<TargetArg>,
}
