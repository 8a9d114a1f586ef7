//! Configuration loading.
//!
//! Reads `config.toml`, writing the defaults out on first run. A file that
//! cannot be parsed never stops the app: `load_or_default` falls back to
//! `AppConfig::default()` and hands the error back for reporting.

use crate::paths::{NostalgiaPaths, PathError};
use crate::storage::AtomicFile;
use nostalgia_core::config::AppConfig;
use nostalgia_core::error::{NostalgiaError, Result};
use nostalgia_core::install_mode::DisplayMode;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable that overrides the configured display mode.
pub const DISPLAY_MODE_ENV: &str = "NOSTALGIA_DISPLAY_MODE";

pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Uses the standard config file location.
    pub fn from_paths(paths: &NostalgiaPaths) -> std::result::Result<Self, PathError> {
        Ok(Self::new(paths.config_file()?))
    }

    /// Loads the config, creating the file with defaults if it is missing.
    pub fn load(&self) -> Result<AppConfig> {
        let content = self
            .file
            .read()
            .map_err(|e| NostalgiaError::io(e.to_string()))?;

        match content {
            Some(text) if !text.trim().is_empty() => Ok(toml::from_str(&text)?),
            _ => {
                let config = AppConfig::default();
                self.save(&config)?;
                info!(path = %self.file.path().display(), "wrote default config");
                Ok(config)
            }
        }
    }

    /// Like `load`, but any failure degrades to defaults.
    ///
    /// Config is read before logging exists, so the failure is returned
    /// instead of logged. Pass it to [`report_fallback`] once a subscriber
    /// is installed.
    pub fn load_or_default(&self) -> (AppConfig, Option<NostalgiaError>) {
        match self.load() {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let text = toml::to_string_pretty(config)?;
        self.file
            .write(&text)
            .map_err(|e| NostalgiaError::io(e.to_string()))
    }
}

/// Logs a config failure returned by [`ConfigService::load_or_default`].
pub fn report_fallback(path: &Path, error: Option<&NostalgiaError>) -> bool {
    let Some(e) = error else {
        return false;
    };
    warn!(path = %path.display(), "config unusable, using defaults: {}", e);
    true
}

/// Applies a display-mode override. Unknown values are ignored with a warning.
pub fn apply_display_mode_override(config: &mut AppConfig, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    match DisplayMode::from_str(value.trim()) {
        Ok(mode) => config.display_mode = mode,
        Err(_) => warn!(value, "ignoring unknown display mode"),
    }
}

/// Reads [`DISPLAY_MODE_ENV`] and applies it.
pub fn apply_env_overrides(config: &mut AppConfig) {
    let value = std::env::var(DISPLAY_MODE_ENV).ok();
    apply_display_mode_override(config, value.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::new(path.clone());

        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_reads_saved_values() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));

        let config = AppConfig {
            locale: Some("fr".to_string()),
            ball_size: 12.0,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_broken_config_degrades() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "ball_size = [not toml").unwrap();

        let service = ConfigService::new(path);
        assert!(service.load().is_err());

        let (config, error) = service.load_or_default();
        assert_eq!(config, AppConfig::default());
        assert!(error.is_some());
        assert!(report_fallback(service.path(), error.as_ref()));
    }

    #[test]
    fn test_missing_config_has_no_fallback_error() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));

        let (config, error) = service.load_or_default();
        assert_eq!(config, AppConfig::default());
        assert!(error.is_none());
        assert!(!report_fallback(service.path(), error.as_ref()));
    }

    #[test]
    fn test_display_mode_override() {
        let mut config = AppConfig::default();
        apply_display_mode_override(&mut config, Some("standalone"));
        assert_eq!(config.display_mode, DisplayMode::Standalone);

        apply_display_mode_override(&mut config, Some("kiosk"));
        assert_eq!(config.display_mode, DisplayMode::Standalone);

        apply_display_mode_override(&mut config, None);
        assert_eq!(config.display_mode, DisplayMode::Standalone);
    }
}
