//! Library half of the `ll1c` command-line driver.
//!
//! The binary only parses arguments and prints; the work and its results
//! live here so they can be tested without spawning processes.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Log parser decisions to stderr, filtered by `RUST_LOG`.
///
/// Stdout carries command output only, so nothing is installed unless
/// `RUST_LOG` is set. Later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time();
        tracing_subscriber::registry()
            .with(layer)
            .with(EnvFilter::new(directives))
            .init();
    });
}
