//! Logging Infrastructure
//!
//! Structured logging setup for development and production environments.

use std::path::Path;

/// Initialize console-only logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, adding a daily-rolling file output when the
/// given directory exists
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir {
        Some(dir) if dir.is_dir() => {
            let file_appender = tracing_appender::rolling::daily(dir, "venue-server");
            subscriber.with_writer(file_appender).init();
        }
        _ => subscriber.init(),
    }
}
