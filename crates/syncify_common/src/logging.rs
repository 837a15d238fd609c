//! Logging utilities for the Syncify application.
//!
//! Provides a standardized tracing-subscriber setup used by the backend
//! binary and by integration tests.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still takes precedence; the level given here only sets
/// the default directive for the `syncify` crates. Safe to call more
/// than once (subsequent calls are no-ops).
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("syncify={level}").parse().expect("valid directive"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();
}
