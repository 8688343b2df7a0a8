use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize tracing with a stderr layer and an `aggregator.log` file
/// in `log_dir`. Recoverable pipeline conditions (a missing raw log
/// day) are logged at error level; fatal errors surface through the
/// process exit instead.
pub fn init(log_dir: &Path) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        panic!("failed to create log directory {}: {e}", log_dir.display());
    }
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("aggregator")
        .filename_suffix("log")
        .build(log_dir)
        .unwrap_or_else(|e| panic!("failed to create log file appender: {e}"));

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    // try_init fails once a global subscriber exists, which is the
    // normal case in tests; any other failure is a startup bug.
    if let Err(e) = registry.try_init() {
        let msg = e.to_string();
        if !msg.contains("already been set") {
            panic!("failed to initialize tracing: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_is_idempotent() {
        let temp = TempDir::new().unwrap();
        init(temp.path());
        init(temp.path());
    }

    #[test]
    fn init_creates_log_file() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("logs");
        init(&log_dir);
        assert!(log_dir.join("aggregator.log").exists());
    }
}
