//! Logging setup for the packrig CLI.
//!
//! Verbosity is resolved in this order:
//! 1. `--verbose`: debug level for packrig crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: info level for packrig crates
//!
//! Log lines go to stderr; stdout carries command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "packrig_config=debug,packrig_cli=debug";
const QUIET_FILTER: &str = "packrig_config=error,packrig_cli=error";
const DEFAULT_FILTER: &str = "packrig_config=info,packrig_cli=info";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_filter_enables_debug() {
        let filter = build_filter(true, false);
        assert!(filter.to_string().contains("packrig_config=debug"));
    }

    #[test]
    fn quiet_filter_limits_to_errors() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("packrig_cli=error"));
    }
}
