//! Logging setup for the prism CLI.
//!
//! # Verbosity
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for prism crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`, when set
//! 4. INFO for prism crates
//!
//! ```rust,no_run
//! use prism_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("Starting build");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "prism=debug,prism_bundler=debug,prism_config=debug,prism_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "prism=info,prism_bundler=info,prism_config=info,prism_cli=info";

/// Pick the filter directives for the given flags.
pub fn filter_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
