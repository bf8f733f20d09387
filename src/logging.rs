//! Diagnostic logging for the `quickpick` binary.
//!
//! The library only emits `tracing` events. Binaries opt in by calling
//! [`initialize`], which writes to stderr so stdout stays reserved for picker
//! output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `quickpick=debug`.
pub const LOG_ENV: &str = "QUICKPICK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from [`LOG_ENV`], falling back to warnings only.
fn filter_from_env() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn initialize() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter_from_env())
		.with_writer(std::io::stderr)
		.with_target(true)
		.try_init();
}
