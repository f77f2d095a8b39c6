//! Classify command implementation.

use unipack_config::{Classification, Generator, build_externals};

use crate::cli::ClassifyArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print `bundle` or the external descriptor for one dependency.
pub fn execute(args: ClassifyArgs) -> Result<()> {
    let settings = utils::load_settings(None)?;
    let generator = Generator::new(settings);

    let explicit = args.target.map(|t| unipack_config::BuildTarget::from(t).as_str());
    let target = generator.resolve(explicit, None).target;

    match build_externals(target).classify(&args.dir, &args.specifier) {
        Classification::Bundle => println!("bundle"),
        Classification::External(descriptor) => println!("{descriptor}"),
    }
    Ok(())
}
