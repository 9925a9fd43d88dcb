//! Diagnostic tracing for scaffold runs.
//!
//! Tracing output goes to stderr. Command output (summaries, JSON reports)
//! goes to stdout and is unaffected by the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset, by number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,scaffold=info",
        _ => "warn,scaffold=debug",
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set.
/// Output: stderr, compact format, no timestamps.
///
/// # Example
/// ```bash
/// RUST_LOG=scaffold=debug aoc-scaffold 2024
/// aoc-scaffold 2024 -vv
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .without_time(),
        )
        .init();
}
