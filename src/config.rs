//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::page::Page;

/// Google Maps embed for the Surat collection route.
pub const DEFAULT_MAP_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3720.596118435767!2d72.78440031493508!3d21.168478985923!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3be04e29a334e299%3A0x522340f1a3b9346c!2sSurat%2C%20Gujarat!5e0!3m2!1sen!2sin!4v1662105377074!5m2!1sen!2sin";

/// Upper bound for the simulated classification latency.
pub const MAX_CLASSIFIER_DELAY_MS: u64 = 60_000;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub classifier: ClassifierConfig,
    pub map: MapConfig,
    pub logging: LoggingConfig,
}

/// Window and navigation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page shown at startup. Unrecognized names open the dashboard.
    pub start_page: String,
    pub window_width: f32,
    pub window_height: f32,
}

/// Simulated classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Delay between a drop and its canned result, in milliseconds.
    pub delay_ms: u64,
}

/// Route map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub title: String,
    pub embed_url: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Write a daily rolling log file next to the app data.
    pub file_enabled: bool,
}

impl AppConfig {
    /// Get config file path (platform config dir, else next to the executable).
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("org", "WasteWise", "WasteWise")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.window_width < 400.0 || self.ui.window_height < 300.0 {
            return Err(ConfigError::Validation(
                "Window size must be at least 400x300".to_string(),
            ));
        }
        if self.classifier.delay_ms == 0 {
            return Err(ConfigError::Validation(
                "Classifier delay must be at least 1 ms".to_string(),
            ));
        }
        if self.classifier.delay_ms > MAX_CLASSIFIER_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "Classifier delay cannot exceed {MAX_CLASSIFIER_DELAY_MS} ms"
            )));
        }
        if !self.map.embed_url.starts_with("http") {
            return Err(ConfigError::Validation(
                "Map URL must start with http:// or https://".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Invalid log level '{}': {e}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Page to open at startup.
    pub fn start_page(&self) -> Page {
        Page::from_name(&self.ui.start_page)
    }

    /// Page to open at startup, preferring a one-off override. Leaves the config untouched.
    pub fn resolve_start_page(&self, page_override: Option<&str>) -> Page {
        page_override.map_or_else(|| self.start_page(), Page::from_name)
    }

    /// Simulated classification latency.
    pub fn classifier_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.classifier.delay_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Dashboard.name().to_string(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Surat, Gujarat".to_string(),
            embed_url: DEFAULT_MAP_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.delay_ms, 1000);
        assert_eq!(config.start_page(), Page::Dashboard);
    }

    #[test]
    fn test_validation_delay_bounds() {
        let mut config = AppConfig::default();

        config.classifier.delay_ms = 0;
        assert!(config.validate().is_err());

        config.classifier.delay_ms = MAX_CLASSIFIER_DELAY_MS + 1;
        assert!(config.validate().is_err());

        config.classifier.delay_ms = 250;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_map_url() {
        let mut config = AppConfig::default();
        config.map.embed_url = "ftp://maps.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_window_too_small() {
        let mut config = AppConfig::default();
        config.ui.window_width = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "wastewise=loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.logging.level = "wastewise=debug,info".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_try_load_rejects_unparseable_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"wastewise=loud\"\n").unwrap();

        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_start_page_override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::default();
        assert_eq!(config.resolve_start_page(Some("Map View")), Page::MapView);
        assert_eq!(config.resolve_start_page(Some("nowhere")), Page::Dashboard);
        assert_eq!(config.resolve_start_page(None), Page::Dashboard);

        config.save(&path).unwrap();
        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded.start_page(), Page::Dashboard),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_start_page_falls_back() {
        let mut config = AppConfig::default();
        config.ui.start_page = "Settings".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_page(), Page::Dashboard);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[classifier]\ndelay_ms = 1500\n").unwrap();
        assert_eq!(config.classifier.delay_ms, 1500);
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.start_page = "Map View".to_string();
        config.classifier.delay_ms = 2000;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }

    #[test]
    fn test_try_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));

        std::fs::write(&path, "[classifier]\ndelay_ms = \"soon\"\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));

        std::fs::write(&path, "[classifier]\ndelay_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Validation(_))
        ));
    }
}
