//! Logging Infrastructure
//!
//! Structured logging setup. The TUI owns stdout, so interactive runs log
//! to a rolling file instead of the terminal.

use std::path::Path;

/// Initialize the logger with terminal output.
pub fn init_logger(log_level: Option<&str>) {
    init_logger_with_file(log_level, None);
}

/// Initialize the logger, writing to a daily-rolling file when `log_dir`
/// points at an existing directory.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "storefront");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
