//! Logging setup
//!
//! Logs go to stdout, or to a daily rolling file when `log_dir` exists.
//! `RUST_LOG` overrides `level` when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber; later calls are no-ops
pub fn init_logger(level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "merchant-client");
            let _ = subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}
