//! unipack CLI - prints bundler configuration trees.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use unipack_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Registry(registry_args) => commands::registry_execute(registry_args),
        cli::Command::Classify(classify_args) => commands::classify_execute(classify_args),
    };

    result.map_err(error::cli_error_to_miette)
}
