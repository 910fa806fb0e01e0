//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set. Console narration goes to stdout;
/// logs go to stderr and stay quiet by default.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
