//! Command implementations.
//!
//! Each command loads [`Settings`](unipack_config::Settings) from the
//! environment once, then prints JSON or text to stdout. Logs go to stderr.

pub mod classify;
pub mod generate;
pub mod registry;
pub(crate) mod utils;

pub use classify::execute as classify_execute;
pub use generate::execute as generate_execute;
pub use registry::execute as registry_execute;
