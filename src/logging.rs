//! Diagnostics setup for the binary. The library only emits `tracing` events
//! and never installs a subscriber itself.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace). Calling this twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
