//! Tracing subscriber setup
//!
//! Logs go to stderr so the display on stdout stays machine-readable.
//! `RUST_LOG` overrides the level picked from `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init_tracing(verbosity: Verbosity, json: bool) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_debug());

    let result = if json {
        builder.json().try_init()
    } else {
        builder.without_time().try_init()
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}
