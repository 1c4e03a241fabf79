// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_parts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//! config.notifications.exit_delay_ms = Some(200);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedParts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

/// `[notifications]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Auto-dismiss duration for notifications that set none. `0` disables it.
    pub default_duration_ms: Option<u64>,
    pub enter_delay_ms: Option<u64>,
    pub exit_delay_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            enter_delay_ms: Some(DEFAULT_TOAST_ENTER_DELAY_MS),
            exit_delay_ms: Some(DEFAULT_TOAST_EXIT_DELAY_MS),
        }
    }
}

/// `[panel]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel heading. Falls back to the localized "Menu" when unset.
    pub title: Option<String>,
    pub enter_delay_ms: Option<u64>,
    pub unmount_delay_ms: Option<u64>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: None,
            enter_delay_ms: Some(DEFAULT_PANEL_ENTER_DELAY_MS),
            unmount_delay_ms: Some(DEFAULT_PANEL_UNMOUNT_DELAY_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            language: Some("fr".to_string()),
            notifications: NotificationsConfig {
                default_duration_ms: Some(0),
                enter_delay_ms: Some(20),
                exit_delay_ms: Some(150),
            },
            panel: PanelConfig {
                title: Some("Navigation".to_string()),
                enter_delay_ms: Some(5),
                unmount_delay_ms: Some(250),
            },
        };
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
        assert!(loaded.language.is_none());
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n[panel]\ntitle = \"Go\"\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.notifications, NotificationsConfig::default());
        assert_eq!(loaded.panel.title.as_deref(), Some("Go"));
        assert_eq!(
            loaded.panel.unmount_delay_ms,
            Some(DEFAULT_PANEL_UNMOUNT_DELAY_MS)
        );
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_uses_reference_timings() {
        let config = Config::default();
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_TOAST_DURATION_MS)
        );
        assert_eq!(
            config.notifications.exit_delay_ms,
            Some(DEFAULT_TOAST_EXIT_DELAY_MS)
        );
        assert!(config.panel.title.is_none());
    }
}
