//! Tracing subscriber setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` always wins; otherwise the caller's default filter applies.
//!
//! ```ignore
//! chainknight_core::logging::init(chainknight_core::logging::verbosity_filter(cli.verbose));
//! ```

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `RUST_LOG` if set and valid, else `default_filter`
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, embedding).
pub fn init(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .try_init()
        .is_ok()
}
