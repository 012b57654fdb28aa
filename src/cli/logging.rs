//! Tracing subscriber setup
//!
//! `RUST_LOG` controls the filter; `default_level` applies when it is unset.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// Later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .try_init();
}
