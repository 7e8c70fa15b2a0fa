// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast engine's configuration, including loading and
//! saving preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Queue capacity, timing and per-toast defaults
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.limit = Some(5);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::toast::ToastLimit;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Corner or edge of the window the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Returns whether toasts stack downward from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }
}

/// Vertical spacing between stacked toasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Gap {
    Sm,
    #[default]
    Md,
    Lg,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast queue and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Maximum number of toasts kept at once (oldest evicted first).
    #[serde(default = "default_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Default auto-dismiss duration in milliseconds (0 = never).
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Closing animation window in milliseconds.
    #[serde(default = "default_closing_ms", skip_serializing_if = "Option::is_none")]
    pub closing_ms: Option<u64>,

    /// Timer tick interval in milliseconds.
    #[serde(default = "default_tick_ms", skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,

    /// Anchor of the toast stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Spacing between toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            duration_ms: default_duration_ms(),
            closing_ms: default_closing_ms(),
            tick_ms: default_tick_ms(),
            position: Some(Position::default()),
            gap: Some(Gap::default()),
            dismissible: Some(DEFAULT_DISMISSIBLE),
            show_progress: Some(DEFAULT_SHOW_PROGRESS),
            pause_on_hover: Some(DEFAULT_PAUSE_ON_HOVER),
        }
    }
}

/// Persisted configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,
}

fn default_limit() -> Option<usize> {
    Some(DEFAULT_TOAST_LIMIT)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_closing_ms() -> Option<u64> {
    Some(DEFAULT_CLOSING_WINDOW_MS)
}

fn default_tick_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

// =============================================================================
// Resolved Runtime Settings
// =============================================================================

/// Fully resolved settings a `Toaster` runs with.
///
/// Every value is clamped into its supported range, so a hand-edited
/// `settings.toml` cannot request a zero-capacity queue or a busy-looping tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToasterConfig {
    pub limit: ToastLimit,
    pub default_duration: Duration,
    pub closing_window: Duration,
    pub tick_interval: Duration,
    pub position: Position,
    pub gap: Gap,
    pub dismissible: bool,
    pub show_progress: bool,
    pub pause_on_hover: bool,
}

impl ToasterConfig {
    /// Resolves a persisted configuration into runtime settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let toasts = &config.toasts;
        Self {
            limit: ToastLimit::new(toasts.limit.unwrap_or(DEFAULT_TOAST_LIMIT)),
            default_duration: Duration::from_millis(
                toasts
                    .duration_ms
                    .unwrap_or(DEFAULT_TOAST_DURATION_MS)
                    .min(MAX_TOAST_DURATION_MS),
            ),
            closing_window: Duration::from_millis(
                toasts
                    .closing_ms
                    .unwrap_or(DEFAULT_CLOSING_WINDOW_MS)
                    .min(MAX_CLOSING_WINDOW_MS),
            ),
            tick_interval: Duration::from_millis(
                toasts
                    .tick_ms
                    .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
                    .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
            ),
            position: toasts.position.unwrap_or_default(),
            gap: toasts.gap.unwrap_or_default(),
            dismissible: toasts.dismissible.unwrap_or(DEFAULT_DISMISSIBLE),
            show_progress: toasts.show_progress.unwrap_or(DEFAULT_SHOW_PROGRESS),
            pause_on_hover: toasts.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER),
        }
    }

    /// Returns a copy with a different queue capacity.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = ToastLimit::new(limit);
        self
    }
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path, honoring an explicit override first and the
/// `ICED_TOAST_CONFIG_DIR` environment variable second.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
        .map(|mut path| {
            path.push(CONFIG_FILE);
            path
        })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Unparseable content falls back to defaults rather than failing, so a
/// corrupted file never prevents the application from starting.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_toast_settings() {
        let mut config = Config::default();
        config.toasts.limit = Some(4);
        config.toasts.position = Some(Position::BottomLeft);
        config.toasts.gap = Some(Gap::Lg);
        config.toasts.pause_on_hover = Some(false);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("[toasts]\nlimit = 3\n").expect("valid toml");
        assert_eq!(config.toasts.limit, Some(3));
        assert_eq!(config.toasts.duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
        assert_eq!(config.toasts.closing_ms, Some(DEFAULT_CLOSING_WINDOW_MS));
    }

    #[test]
    fn positions_use_kebab_case() {
        let config: Config =
            toml::from_str("[toasts]\nposition = \"bottom-center\"\ngap = \"sm\"\n")
                .expect("valid toml");
        assert_eq!(config.toasts.position, Some(Position::BottomCenter));
        assert_eq!(config.toasts.gap, Some(Gap::Sm));
    }

    #[test]
    fn load_with_override_uses_given_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.toasts.limit = Some(7);

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.toasts.limit, Some(7));
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert!(warning.is_none());
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn toaster_config_defaults_match_constants() {
        let resolved = ToasterConfig::default();
        assert_eq!(resolved.limit.value(), DEFAULT_TOAST_LIMIT);
        assert_eq!(
            resolved.default_duration,
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
        assert_eq!(resolved.position, Position::TopRight);
        assert_eq!(resolved.gap, Gap::Md);
        assert!(resolved.dismissible);
        assert!(resolved.show_progress);
        assert!(resolved.pause_on_hover);
    }

    #[test]
    fn toaster_config_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.toasts.limit = Some(0);
        config.toasts.tick_ms = Some(1);
        config.toasts.duration_ms = Some(u64::MAX);

        let resolved = ToasterConfig::from_config(&config);
        assert_eq!(resolved.limit.value(), MIN_TOAST_LIMIT);
        assert_eq!(
            resolved.tick_interval,
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
        assert_eq!(
            resolved.default_duration,
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn position_is_top_detects_top_edge() {
        assert!(Position::TopRight.is_top());
        assert!(Position::TopCenter.is_top());
        assert!(!Position::BottomLeft.is_top());
    }
}
