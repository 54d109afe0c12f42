use std::path::PathBuf;

#[cfg(feature = "debug-log")]
mod inner {
    use super::*;
    use crate::config::AppConfig;
    use std::fs;
    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    const DEFAULT_LOG_FILE: &str = "echo-agent-debug.log";

    static LOG_PATH: std::sync::OnceLock<PathBuf> = std::sync::OnceLock::new();

    /// Reads `AppConfig` and installs the JSON file subscriber.
    pub fn init() -> Option<(PathBuf, WorkerGuard)> {
        let config = AppConfig::load();

        let log_path = config
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let file = match fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to open log file: {e}");
                return None;
            }
        };

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let filter = config
            .log_filter
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        );

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("Failed to set tracing subscriber");
            return None;
        }

        LOG_PATH.set(log_path.clone()).ok();

        tracing::info!("Debug logging initialized");

        Some((log_path, guard))
    }

    pub fn log_file_path() -> Option<&'static PathBuf> {
        LOG_PATH.get()
    }
}

#[cfg(not(feature = "debug-log"))]
mod inner {
    use super::*;

    #[inline(always)]
    pub const fn init() -> Option<(PathBuf, ())> {
        None
    }

    #[inline(always)]
    pub const fn log_file_path() -> Option<&'static PathBuf> {
        None
    }
}

pub use inner::*;
