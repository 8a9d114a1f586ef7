//! Application configuration model.
//!
//! Loaded from `config.toml` by `nostalgia-infrastructure`; every field has a
//! default so a partial or missing file still yields a usable config.

use crate::install_mode::DisplayMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default collage canvas size, in em.
pub const DEFAULT_BALL_SIZE: f64 = 10.0;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Language tag for the phrase tables. `None` defers to the environment.
    pub locale: Option<String>,
    pub display_mode: DisplayMode,
    /// Collage canvas size in em. Shape positions scale with it.
    pub ball_size: f64,
    pub timings: Timings,
    pub log_level: String,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            display_mode: DisplayMode::default(),
            ball_size: DEFAULT_BALL_SIZE,
            timings: Timings::default(),
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Delays between scripted presentation cues, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    /// Slide-out of the old prompt before the new one settles.
    pub prompt_swap_ms: u64,
    /// Pause before a new shape starts falling into the collage.
    pub shape_drop_ms: u64,
    /// Time for a dropped shape to settle.
    pub shape_settle_ms: u64,
    /// Interval between shapes released during playback.
    pub release_interval_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            prompt_swap_ms: 500,
            shape_drop_ms: 50,
            shape_settle_ms: 1000,
            release_interval_ms: 600,
        }
    }
}

impl Timings {
    /// All delays zero. Used by tests and non-interactive commands.
    pub fn immediate() -> Self {
        Self {
            prompt_swap_ms: 0,
            shape_drop_ms: 0,
            shape_settle_ms: 0,
            release_interval_ms: 0,
        }
    }

    pub fn prompt_swap(&self) -> Duration {
        Duration::from_millis(self.prompt_swap_ms)
    }

    pub fn shape_drop(&self) -> Duration {
        Duration::from_millis(self.shape_drop_ms)
    }

    pub fn shape_settle(&self) -> Duration {
        Duration::from_millis(self.shape_settle_ms)
    }

    pub fn release_interval(&self) -> Duration {
        Duration::from_millis(self.release_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            display_mode = "standalone"

            [timings]
            prompt_swap_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.display_mode, DisplayMode::Standalone);
        assert_eq!(config.ball_size, DEFAULT_BALL_SIZE);
        assert_eq!(config.timings.prompt_swap_ms, 10);
        assert_eq!(config.timings.release_interval_ms, 600);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_immediate_timings() {
        let timings = Timings::immediate();
        assert!(timings.prompt_swap().is_zero());
        assert!(timings.release_interval().is_zero());
    }
}
