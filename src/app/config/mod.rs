// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from and
//! saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[shelf]` - Dismiss-all keys and the form's default category
//!
//! Settings are read once at startup. Dismiss keys in particular are fixed
//! for the lifetime of the process.
//!
//! # Examples
//!
//! ```no_run
//! use toast_shelf::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.shelf.dismiss_keys = vec!["Escape".to_string(), "Delete".to_string()];
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::notifications::Category;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast shelf settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelfConfig {
    /// Key names that dismiss every toast (e.g. `"Escape"`).
    #[serde(default = "default_dismiss_keys")]
    pub dismiss_keys: Vec<String>,

    /// Category preselected in the playground form.
    #[serde(default)]
    pub default_category: Category,
}

impl ShelfConfig {
    /// The configured dismiss keys, or the defaults when none are set.
    #[must_use]
    pub fn effective_dismiss_keys(&self) -> Vec<String> {
        let keys: Vec<String> = self
            .dismiss_keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        if keys.is_empty() {
            default_dismiss_keys()
        } else {
            keys
        }
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            dismiss_keys: default_dismiss_keys(),
            default_category: DEFAULT_CATEGORY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub shelf: ShelfConfig,
}

fn default_dismiss_keys() -> Vec<String> {
    DEFAULT_DISMISS_KEYS.iter().map(|k| k.to_string()).collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
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
                Ok(config) => {
                    log::debug!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("Settings could not be loaded, using defaults ({err})")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
