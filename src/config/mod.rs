//! Caller-tunable analytics settings and their on-disk JSON home.

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::AnalyticsError;

const DEFAULT_DIR_NAME: &str = ".funded_core";
const HOME_ENV_VAR: &str = "FUNDED_CORE_HOME";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Knobs the dashboard and history views are computed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Length of the dense daily spending window.
    pub daily_window_days: u32,
    /// How many months back the month-on-month series reaches.
    pub months_back: u32,
    /// Monthly spending ceiling used for over-budget flags.
    pub budget_threshold: f64,
    /// Points balance a new user starts the shop with.
    pub starting_points: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            daily_window_days: 14,
            months_back: 6,
            budget_threshold: 1000.0,
            starting_points: 60,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_budget_threshold(mut self, threshold: f64) -> Self {
        self.budget_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.daily_window_days == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "daily_window_days must be at least 1".into(),
            ));
        }
        if !self.budget_threshold.is_finite() || self.budget_threshold <= 0.0 {
            return Err(AnalyticsError::InvalidConfig(format!(
                "budget_threshold must be a positive amount, got {}",
                self.budget_threshold
            )));
        }
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.funded_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`AnalyticsConfig`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, AnalyticsError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, AnalyticsError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored config, falling back to defaults when none exists.
    pub fn load(&self) -> Result<AnalyticsConfig, AnalyticsError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AnalyticsConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: AnalyticsConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates and writes the config, replacing the old file atomically.
    pub fn save(&self, config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "analytics config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), AnalyticsError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
