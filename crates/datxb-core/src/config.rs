//! Configuration management for datXB.
//!
//! Loads configuration from ${DATXB_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for datXB configuration and data directories.
    //!
    //! DATXB_HOME resolution order:
    //! 1. DATXB_HOME environment variable (if set)
    //! 2. ~/.config/datxb (default)
    //! 3. ./.datxb when no home directory can be determined

    use std::path::PathBuf;

    pub const HOME_ENV_VAR: &str = "DATXB_HOME";

    /// Returns the datXB home directory.
    pub fn datxb_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV_VAR) {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".datxb"),
            |h| h.join(".config").join("datxb"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        datxb_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        datxb_home().join("logs")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated login latency in milliseconds.
    pub login_delay_ms: u64,

    /// Simulated signup latency in milliseconds.
    pub signup_delay_ms: u64,

    /// Notification lifetime in milliseconds.
    pub toast_duration_ms: u64,

    /// Default tracing filter (overridden by `DATXB_LOG`).
    pub log_level: String,
}

impl Config {
    const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
    const DEFAULT_SIGNUP_DELAY_MS: u64 = 1500;
    const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_delay_ms: Self::DEFAULT_LOGIN_DELAY_MS,
            signup_delay_ms: Self::DEFAULT_SIGNUP_DELAY_MS,
            toast_duration_ms: Self::DEFAULT_TOAST_DURATION_MS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
