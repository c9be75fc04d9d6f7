//! Diagnostics output for the binary.
//!
//! Logs go to stderr so that report blocks on stdout stay clean. The level
//! comes from `RUST_LOG` when set, from the config `log_level` otherwise.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")));

    // A second init (tests calling run() twice) is not an error.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
