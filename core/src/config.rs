//! Configuration
//!
//! Tunables for the interaction components, loaded from `folio.toml` in the
//! XDG config directory. A missing file means defaults; a malformed file
//! logs a warning and also means defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors from an explicit config load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Folio tunables. All fields have defaults, so a partial file is fine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Milliseconds between revealed headline characters
    pub char_delay_ms: u64,
    /// Milliseconds before the headline starts typing
    pub initial_delay_ms: u64,
    /// Milliseconds a notification stays fully shown
    pub notification_display_ms: u64,
    /// Quiet period for the resize debouncer, in milliseconds
    pub resize_debounce_ms: u64,
    /// Skip decorative animation: reveal everything immediately, jump
    /// instead of smooth-scrolling, no starfield motion
    pub reduced_motion: bool,
    /// Terminal width at or below which the navigation collapses to a menu
    pub narrow_width: u16,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 180,
            initial_delay_ms: 1000,
            notification_display_ms: 5000,
            resize_debounce_ms: 250,
            reduced_motion: false,
            narrow_width: 80,
        }
    }
}

impl FolioConfig {
    /// Load the config, falling back to defaults on any problem.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(error) => {
                warn!(%error, "could not load folio.toml, using defaults");
                Self::default()
            }
        }
    }

    /// Load the config file if it exists. `Ok(None)` means no file.
    pub fn try_load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&raw)?))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("folio.toml"))
    }

    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_timings() {
        let config = FolioConfig::default();
        assert_eq!(config.char_delay(), Duration::from_millis(180));
        assert_eq!(config.initial_delay(), Duration::from_millis(1000));
        assert_eq!(config.notification_display(), Duration::from_millis(5000));
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert!(!config.reduced_motion);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: FolioConfig = toml::from_str("reduced_motion = true").unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.char_delay_ms, 180);
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let result: Result<FolioConfig, _> = toml::from_str("char_delay_ms = \"fast\"");
        assert!(result.is_err());
    }
}
