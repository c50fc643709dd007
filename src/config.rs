use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding `base_url`
pub const URL_ENV_VAR: &str = "HEART_RISK_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prediction server root, without the `/predict` path
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Delay between revealing a panel and scrolling it into view
    pub scroll_delay_ms: u64,
    /// Query `/health` once at start-up
    pub probe_health: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 30,
            scroll_delay_ms: 100,
            probe_health: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".heart-risk-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    /// Load the saved config, falling back to defaults, then apply
    /// environment overrides
    pub fn resolve() -> Config {
        let mut config = Self::load().unwrap_or_default();
        if let Ok(url) = env::var(URL_ENV_VAR) {
            config.apply_url_override(&url);
        }
        config
    }

    fn apply_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.base_url = url.to_string();
        }
    }

    /// Whether a config file exists on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|p| p.exists())
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
