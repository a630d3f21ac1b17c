use crate::services::Locale;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one JSON file per contact
    pub data_dir: PathBuf,
    pub locale: Locale,
    /// How long an alert stays on screen
    pub alert_duration_secs: u64,
    /// Event polling timeout of the main loop
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir()
                .map(|dir| dir.join("contacts"))
                .unwrap_or_else(|| PathBuf::from("contacts")),
            locale: Locale::default(),
            alert_duration_secs: 5,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".contacts-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Default log file location
    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("contacts-tui.log"))
    }

    /// Load the config at `path`, writing defaults there when it is missing
    pub fn load_or_init(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save the config to disk
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Apply command line overrides on top of file values
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, locale: Option<Locale>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }

    /// Alert lifetime, clamped to what chrono can represent
    pub fn alert_duration(&self) -> chrono::Duration {
        i64::try_from(self.alert_duration_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}
