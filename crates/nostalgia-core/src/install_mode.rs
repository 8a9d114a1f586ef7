//! Install-mode detection.
//!
//! An installed app (standalone, fullscreen or minimal-ui display) keeps its
//! sessions in the ledger backend; a plain browser tab uses the small
//! key-value slot. Callers only ever see the `SessionRecordStore` trait.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The display mode reported by the host environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisplayMode {
    #[default]
    Browser,
    Standalone,
    Fullscreen,
    MinimalUi,
}

/// Which storage backend variant the record store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Running in a browser tab: synchronous key-value slot.
    BrowserTab,
    /// Installed app: asynchronous ledger.
    Installed,
}

impl InstallMode {
    /// Classifies a display mode.
    pub fn detect(display_mode: DisplayMode) -> Self {
        match display_mode {
            DisplayMode::Standalone | DisplayMode::Fullscreen | DisplayMode::MinimalUi => {
                Self::Installed
            }
            DisplayMode::Browser => Self::BrowserTab,
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_installed_modes() {
        for mode in [
            DisplayMode::Standalone,
            DisplayMode::Fullscreen,
            DisplayMode::MinimalUi,
        ] {
            assert_eq!(InstallMode::detect(mode), InstallMode::Installed);
        }
        assert_eq!(
            InstallMode::detect(DisplayMode::Browser),
            InstallMode::BrowserTab
        );
    }

    #[test]
    fn test_parse_display_mode() {
        assert_eq!(
            DisplayMode::from_str("minimal-ui").unwrap(),
            DisplayMode::MinimalUi
        );
        assert_eq!(
            DisplayMode::from_str("Standalone").unwrap(),
            DisplayMode::Standalone
        );
        assert!(DisplayMode::from_str("kiosk").is_err());
        assert_eq!(DisplayMode::MinimalUi.to_string(), "minimal-ui");
    }
}
