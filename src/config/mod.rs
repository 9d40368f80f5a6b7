// ABOUTME: Configuration for sweep cadence, warning window, and toast duration

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable timings, all optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How far before the expiry date the "expiring soon" toast fires.
    pub warning_window_days: i64,
    /// Cadence of the recurring expiry sweep.
    pub sweep_interval_hours: u64,
    /// How long a toast stays on screen before auto-dismissal.
    pub toast_duration_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warning_window_days: 7,
            sweep_interval_hours: 24,
            toast_duration_secs: 5,
        }
    }
}

impl Config {
    /// `<config_dir>/pillbox/config.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pillbox").join("config.toml"))
    }

    /// Loads from the given path, or the default location. A missing file
    /// yields defaults; an unreadable or malformed file is an error the
    /// caller may log and fall back from.
    pub fn load(override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn warning_window(&self) -> chrono::Duration {
        chrono::Duration::days(self.warning_window_days)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_hours * 3600)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}
