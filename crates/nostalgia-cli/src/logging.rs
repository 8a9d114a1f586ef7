//! Tracing setup.
//!
//! Logs go to stderr so they never interleave with prompts on stdout, or
//! to a daily file under the logs directory when `log_to_file` is set.

use anyhow::{Result, anyhow};
use nostalgia_core::config::AppConfig;
use nostalgia_infrastructure::NostalgiaPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Overrides the configured level, e.g. `NOSTALGIA_LOG=nostalgia_application=trace`.
pub const LOG_ENV: &str = "NOSTALGIA_LOG";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
pub fn init(config: &AppConfig, paths: &NostalgiaPaths) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_to_file {
        let log_dir = paths
            .logs_dir()
            .map_err(|e| anyhow!("Failed to resolve logs directory: {}", e))?;
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, "nostalgiatok.log");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_env_filter(filter)
            .try_init()
            .ok();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_creates_logs_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NostalgiaPaths::new(Some(temp_dir.path().to_path_buf()));
        let config = AppConfig {
            log_to_file: true,
            ..AppConfig::default()
        };

        let guard = init(&config, &paths).unwrap();

        assert!(guard.is_some());
        assert!(paths.logs_dir().unwrap().is_dir());
    }
}
