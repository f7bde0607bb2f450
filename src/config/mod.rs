//! Engine tuning knobs (window sizes and list limits) plus JSON persistence.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::write_atomic;

const APP_DIR: &str = "finance_core";
const HOME_ENV: &str = "FINANCE_CORE_HOME";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_WINDOW_MONTHS: u32 = 6;
pub const DEFAULT_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_TOP_CATEGORIES: usize = 5;
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A hundred years, in months and in days.
pub const MAX_WINDOW_MONTHS: u32 = 1200;
pub const MAX_WINDOW_DAYS: u32 = 36_525;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Explicit parameters of the dashboard computations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Months in the trend series, current month included.
    pub window_months: u32,
    /// Trailing days considered by the category breakdown.
    pub window_days: u32,
    pub top_categories: usize,
    pub upcoming_limit: usize,
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_months: DEFAULT_WINDOW_MONTHS,
            window_days: DEFAULT_WINDOW_DAYS,
            top_categories: DEFAULT_TOP_CATEGORIES,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Rejects windows longer than a hundred years. Zero limits are allowed
    /// and simply produce empty lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_months > MAX_WINDOW_MONTHS {
            return Err(ConfigError::Invalid(format!(
                "window_months {} exceeds {MAX_WINDOW_MONTHS}",
                self.window_months
            )));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "window_days {} exceeds {MAX_WINDOW_DAYS}",
                self.window_days
            )));
        }
        Ok(())
    }
}

/// Loads and stores an [`EngineConfig`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Uses `$FINANCE_CORE_HOME` when set, otherwise the platform
    /// configuration directory, e.g. `~/.config/finance_core` on Linux.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return Ok(Self::with_base_dir(PathBuf::from(custom)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::Invalid("no configuration directory on this platform".into())
        })?;
        Ok(Self::with_base_dir(base.join(APP_DIR)))
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns defaults when the file does not exist yet.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        let config: EngineConfig =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}
