//! Tracing initialization.
//!
//! The TUI owns stdout and stderr while it runs, so events go to
//! `${DATXB_HOME}/logs/datxb.log` instead of the terminal.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "DATXB_LOG";

pub const LOG_FILE_NAME: &str = "datxb.log";

/// Initializes file logging under the default logs directory.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the logs directory cannot be created.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Initializes file logging in `dir`.
///
/// Safe to call more than once; only the first subscriber is installed.
///
/// # Errors
/// Returns an error if `dir` cannot be created.
pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(guard)
}

fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn creates_log_directory() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");
        let guard = init_in(&logs, &Config::default()).unwrap();
        assert!(logs.is_dir());
        drop(guard);
    }
}
