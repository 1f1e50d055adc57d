//! Tracing setup for stdout and optional rolling file output

use std::path::Path;

/// Stdout logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Logging to stdout, or to a daily-rotated file when `log_dir` names an
/// existing directory
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // A missing or non-UTF-8 directory falls back to stdout
    if let Some(dir) = log_dir {
        let path = Path::new(dir);
        if path.exists()
            && let Some(dir) = path.to_str()
        {
            let appender = tracing_appender::rolling::daily(dir, "comanda-server");
            builder.with_writer(appender).init();
            return;
        }
    }

    builder.init();
}
