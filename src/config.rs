//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::models::{Layout, WiringConfig};
use crate::numbering::wiring_offset;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SWITCH_MATRIX_CONFIG_DIR";

/// Default module settings used when command-line flags are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default layout (e.g., "4x32")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Default wiring configuration (only used together with `layout`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiring: Option<WiringConfig>,
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Emit JSON even when `--json` is not passed
    #[serde(default)]
    pub json: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SwitchMatrix/config.toml`
/// - macOS: `~/Library/Application Support/SwitchMatrix/config.toml`
/// - Windows: `%APPDATA%\SwitchMatrix\config.toml`
///
/// `SWITCH_MATRIX_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - `wiring` requires `layout`
/// - `wiring` must be one the layout accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default layout and wiring
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$SWITCH_MATRIX_CONFIG_DIR` if set
    /// - Linux: `~/.config/SwitchMatrix/`
    /// - macOS: `~/Library/Application Support/SwitchMatrix/`
    /// - Windows: `%APPDATA%\SwitchMatrix\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("SwitchMatrix");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        match (self.defaults.layout, self.defaults.wiring) {
            (None, Some(wiring)) => {
                anyhow::bail!("Default wiring {wiring} is set without a default layout")
            }
            (Some(layout), Some(wiring)) => {
                wiring_offset(layout, Some(wiring))
                    .context("Default wiring does not match default layout")?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Fills in a layout and wiring from the configured defaults.
    ///
    /// An explicit layout wins. The default wiring is only applied when the
    /// effective layout is the default layout and no wiring was given.
    /// Returns `None` when no layout is available at all.
    #[must_use]
    pub fn resolve(
        &self,
        layout: Option<Layout>,
        wiring: Option<WiringConfig>,
    ) -> Option<(Layout, Option<WiringConfig>)> {
        let layout = layout.or(self.defaults.layout)?;
        let wiring = wiring.or_else(|| {
            if self.defaults.layout == Some(layout) {
                self.defaults.wiring
            } else {
                None
            }
        });
        Some((layout, wiring))
    }
}
