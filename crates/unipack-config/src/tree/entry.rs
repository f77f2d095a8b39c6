//! Entry assembler.

use crate::axis::{BuildFlavor, BuildTarget};

/// Hot-update client attached to the host server's middleware.
pub const HOT_MIDDLEWARE_CLIENT: &str = "webpack-hot-middleware/client";

/// Poll interval of the client-side hot-update runtime, in milliseconds.
pub const HOT_POLL_INTERVAL_MS: u32 = 1000;

/// Polling hot-update runtime module for the given interval.
pub fn hot_poll_module(interval_ms: u32) -> String {
    format!("webpack/hot/poll?{interval_ms}")
}

/// Ordered entry points for one axis combination.
///
/// Development builds get exactly one hot-update module in front. The axis
/// main module is always last, since the bundler exports the final entry.
pub fn build_entries(target: BuildTarget, flavor: BuildFlavor) -> Vec<String> {
    let mut entries = Vec::with_capacity(2);

    if !flavor.is_production() {
        entries.push(match target {
            BuildTarget::Server => HOT_MIDDLEWARE_CLIENT.to_string(),
            BuildTarget::Client => hot_poll_module(HOT_POLL_INTERVAL_MS),
        });
    }

    entries.push(target.main_module());
    entries
}
