//! Shared observability bootstrap (tracing/logging) for the todoapi binaries.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set: application logs at `info`,
/// plus the per-request events emitted by `tower_http`'s trace middleware.
const DEFAULT_DIRECTIVES: &str = "info,tower_http=info";

/// Initialize process-wide tracing/logging.
///
/// JSON events with timestamps; `RUST_LOG` tunes verbosity only and never
/// changes behavior. Safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
