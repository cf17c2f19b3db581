//! Logging setup for the nutri binary.
//!
//! stdout carries response JSON, so every log line goes to stderr. The
//! level comes from the `-v` count unless `RUST_LOG` is set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map a `-v` repeat count to a filter directive.
///
/// Quiet by default: only warnings (validation rejections) and errors.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber for a given `-v` count
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Capture pipeline logs in test output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
