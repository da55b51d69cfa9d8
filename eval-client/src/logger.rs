//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_level(None, false);
}

/// Initialize the logger with an optional level and JSON output
pub fn init_logger_with_level(log_level: Option<&str>, json: bool) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // a second init (tests, embedding hosts) keeps the existing subscriber
    let _ = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}
