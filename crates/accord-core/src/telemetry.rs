//! Tracing subscriber setup for binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! front end's job. Verbosity maps onto an env-filter directive unless
//! `RUST_LOG` is set, which always wins.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `verbosity` is the CLI's `-v` count:
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
