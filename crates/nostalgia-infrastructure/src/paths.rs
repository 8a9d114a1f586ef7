//! Unified path management for nostalgiaTok files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/nostalgiatok/       # Config directory
//! ├── config.toml               # Application configuration
//! ├── storage.json              # Key-value slot (name, browser-tab sessions)
//! └── logs/                     # Application logs
//!     └── nostalgiatok.log.YYYY-MM-DD
//!
//! ~/.local/share/nostalgiatok/  # Data directory
//! └── sessions.ledger           # Ledger (installed-mode sessions)
//! ```
//!
//! A base directory override (`--data-dir`) places everything under one root.

use std::path::PathBuf;

const APP_DIR: &str = "nostalgiatok";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

#[derive(Debug, Clone, Default)]
pub struct NostalgiaPaths {
    base_override: Option<PathBuf>,
}

impl NostalgiaPaths {
    /// Creates a resolver. `base_override` replaces both the config and data roots.
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    /// Returns the configuration directory (e.g. `~/.config/nostalgiatok/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory (e.g. `~/.local/share/nostalgiatok/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// The key-value slot file.
    pub fn slot_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("storage.json"))
    }

    /// The session ledger file.
    pub fn ledger_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("sessions.ledger"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
