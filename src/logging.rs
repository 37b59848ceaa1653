//! Logging setup.
//!
//! `tracing` with an `EnvFilter`: `RUST_LOG` picks the level (default
//! `info`). Log lines go to stderr; stdout is reserved for the result
//! payload.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber. Call once, from the binary.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes logging for tests: debug level, captured writer, safe to
/// call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
