//! Generate command implementation.

use unipack_config::Generator;

use crate::cli::GenerateArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the configuration tree selected by flags and environment.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let settings = utils::load_settings(args.root.as_deref())?;
    let generator = Generator::new(settings);

    let tree = generator.generate(args.target.map(Into::into), args.flavor.map(Into::into));
    tracing::info!(
        build_target = %tree.build_target,
        build_flavor = %tree.build_flavor,
        "generated configuration tree"
    );

    println!("{}", utils::to_json(&tree, args.compact)?);
    Ok(())
}
