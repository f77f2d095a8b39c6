use clap::ValueEnum;
use unipack_config::{BuildFlavor, BuildTarget};

/// Build target selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Node-like runtime, dependencies resolved at runtime
    #[value(name = "server")]
    Server,

    /// Browser runtime, everything bundled
    #[value(name = "client")]
    Client,
}

/// Build flavor selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum FlavorArg {
    /// Hot module replacement and debugging aids
    #[value(name = "development")]
    Development,

    /// Deduplication, constant folding and minification
    #[value(name = "production")]
    Production,
}

impl From<TargetArg> for BuildTarget {
    fn from(t: TargetArg) -> Self {
        match t {
            TargetArg::Server => BuildTarget::Server,
            TargetArg::Client => BuildTarget::Client,
        }
    }
}

impl From<FlavorArg> for BuildFlavor {
    fn from(f: FlavorArg) -> Self {
        match f {
            FlavorArg::Development => BuildFlavor::Development,
            FlavorArg::Production => BuildFlavor::Production,
        }
    }
}
