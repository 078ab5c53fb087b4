// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and log level
//! - `[gallery]` - Asset root and thumbnail size
//! - `[viewer]` - Display container height
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_PANO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_pano::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! println!("assets from {}", config.asset_root().display());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

/// Gallery strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory image references are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,

    /// Thumbnail edge length in logical pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_root: None,
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

/// Panorama display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Height of the display container in logical pixels.
    #[serde(
        default = "default_container_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub container_height: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container_height: default_container_height(),
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
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Asset root, falling back to [`DEFAULT_ASSET_ROOT`].
    #[must_use]
    pub fn asset_root(&self) -> PathBuf {
        self.gallery
            .asset_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT))
    }

    /// Thumbnail size clamped to the supported range; non-finite values
    /// fall back to [`DEFAULT_THUMBNAIL_SIZE`].
    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.gallery
            .thumbnail_size
            .filter(|size| size.is_finite())
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Container height clamped to the supported range; non-finite values
    /// fall back to [`DEFAULT_CONTAINER_HEIGHT`].
    #[must_use]
    pub fn container_height(&self) -> f32 {
        self.viewer
            .container_height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_CONTAINER_HEIGHT)
            .clamp(MIN_CONTAINER_HEIGHT, MAX_CONTAINER_HEIGHT)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.general
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_size() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_container_height() -> Option<f32> {
    Some(DEFAULT_CONTAINER_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        path = %path.display(),
                        "failed to load settings, using defaults"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and a config error if it
/// is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
