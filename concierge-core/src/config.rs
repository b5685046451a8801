use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1";
/// Longest horizon the forecast API serves.
pub const DEFAULT_FORECAST_DAYS: u8 = 16;

pub const GEOCODING_URL_ENV: &str = "CONCIERGE_GEOCODING_URL";
pub const FORECAST_URL_ENV: &str = "CONCIERGE_FORECAST_URL";

/// Settings read from disk. Nothing here is ever written back.
///
/// Example TOML:
/// ```toml
/// forecast_days = 16
/// language = "en"
/// timeout_secs = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the geocoding API (without `/search`).
    pub geocoding_base_url: String,

    /// Base URL of the forecast API (without `/forecast`).
    pub forecast_base_url: String,

    pub forecast_days: u8,

    /// Language for geocoding result names.
    pub language: String,

    /// Request timeout; unset means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_base_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_base_url: DEFAULT_FORECAST_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            language: "en".to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if no file exists yet,
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Override base URLs from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(GEOCODING_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.geocoding_base_url = url;
        }
        if let Some(url) = lookup(FORECAST_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.forecast_base_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.forecast_days == 0 || self.forecast_days > DEFAULT_FORECAST_DAYS {
            return Err(anyhow!(
                "forecast_days must be between 1 and {DEFAULT_FORECAST_DAYS}, got {}",
                self.forecast_days
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be greater than zero when set"));
        }
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-concierge", "concierge")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn geocoding_search_url(&self) -> String {
        format!("{}/search", self.geocoding_base_url.trim_end_matches('/'))
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.forecast_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();
        assert_eq!(cfg.geocoding_search_url(), "https://geocoding-api.open-meteo.com/v1/search");
        assert_eq!(cfg.forecast_url(), "https://api.open-meteo.com/v1/forecast");
        assert_eq!(cfg.forecast_days, 16);
        assert_eq!(cfg.timeout_secs, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str("language = \"de\"\ntimeout_secs = 5\n").unwrap();
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(cfg.forecast_base_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("concierge-config-that-does-not-exist.toml");
        let cfg = Config::load_from(&path).expect("missing file is not an error");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn overrides_replace_base_urls() {
        let mut cfg = Config::default();
        cfg.apply_overrides(|key| match key {
            GEOCODING_URL_ENV => Some("http://127.0.0.1:9000/".to_string()),
            FORECAST_URL_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(cfg.geocoding_search_url(), "http://127.0.0.1:9000/search");
        assert_eq!(cfg.forecast_base_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn rejects_out_of_range_horizon() {
        let cfg = Config { forecast_days: 17, ..Config::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("forecast_days must be between 1 and 16"));

        let cfg = Config { forecast_days: 0, ..Config::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let cfg = Config { timeout_secs: Some(0), ..Config::default() };
        assert!(cfg.validate().is_err());
    }
}
