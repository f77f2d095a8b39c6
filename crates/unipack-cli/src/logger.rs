//! Logging setup for the unipack CLI.
//!
//! Structured logging through the `tracing` ecosystem. Logs go to stderr so
//! stdout carries only the generated JSON and can be piped straight into a
//! bundler.
//!
//! # Features
//!
//! - **Verbosity control**: `--verbose` for debug, `--quiet` for errors only
//! - **Color support**: terminal detection with `--no-color` override
//! - **Environment filters**: `RUST_LOG` when neither flag is given
//!
//! # Example
//!
//! ```rust,no_run
//! use unipack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("generating registry");
//! debug!(build_target = "server", "resolved axes");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "unipack=debug,unipack_config=debug,unipack_cli=debug";
const QUIET_FILTER: &str = "unipack=error,unipack_config=error,unipack_cli=error";
const DEFAULT_FILTER: &str = "unipack=info,unipack_config=info,unipack_cli=info";

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging for unipack crates
/// * `quiet` - Only show errors
/// * `no_color` - Disable ANSI colors regardless of the terminal
///
/// # Verbosity Levels
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for unipack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO for unipack crates
///
/// # Examples
///
/// ```rust,no_run
/// use unipack_cli::logger::init_logger;
///
/// // Default filter without colors, for CI or piped output
/// init_logger(false, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize the logger with a custom environment filter.
///
/// # Arguments
///
/// * `filter` - Directives deciding which events are emitted
/// * `no_color` - Disable ANSI colors regardless of the terminal
///
/// # Examples
///
/// ```rust,no_run
/// use tracing_subscriber::EnvFilter;
/// use unipack_cli::logger::init_logger_with_filter;
///
/// init_logger_with_filter(EnvFilter::new("unipack_config=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether stderr should receive ANSI colors.
///
/// # Environment Variables
///
/// - `NO_COLOR`: disables colors (<https://no-color.org>), wins over `FORCE_COLOR`
/// - `FORCE_COLOR`: enables colors even when stderr is not a terminal
///
/// Without either, the terminal capabilities of stderr decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
