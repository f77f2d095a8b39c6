//! Registry command implementation.

use unipack_config::Registry;

use crate::cli::RegistryArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the default tree with both named groups.
pub fn execute(args: RegistryArgs) -> Result<()> {
    let settings = utils::load_settings(args.root.as_deref())?;
    let registry = Registry::build(&settings);

    println!("{}", utils::to_json(&registry, args.compact)?);
    Ok(())
}
