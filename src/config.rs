//! Configuration management for Modalist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DIALOG_DEFAULT_HEIGHT_PERCENT, DIALOG_DEFAULT_WIDTH_PERCENT, DIALOG_MAX_PERCENT,
    DIALOG_MIN_PERCENT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Comment lines written above each key by [`Config::generate_default_config`]
const FIELD_COMMENTS: &[(&str, &str)] = &[
    (
        "dialog_width_percent",
        "Default dialog width as a percentage of the terminal width (10-100)",
    ),
    (
        "dialog_height_percent",
        "Default dialog height as a percentage of the terminal height (10-100)",
    ),
    ("mouse_enabled", "Enable mouse capture"),
    ("enabled", "Write logs to a file under the local data directory"),
    ("level", "Minimum level logged: error, warn, info, debug or trace"),
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default dialog width as a percentage of the terminal width
    pub dialog_width_percent: u16,
    /// Default dialog height as a percentage of the terminal height
    pub dialog_height_percent: u16,
    /// Enable mouse capture
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Minimum level written: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dialog_width_percent: DIALOG_DEFAULT_WIDTH_PERCENT,
            dialog_height_percent: DIALOG_DEFAULT_HEIGHT_PERCENT,
            mouse_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("modalist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("modalist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dialog_width_percent", self.ui.dialog_width_percent),
            ("dialog_height_percent", self.ui.dialog_height_percent),
        ] {
            if !(DIALOG_MIN_PERCENT..=DIALOG_MAX_PERCENT).contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    DIALOG_MIN_PERCENT,
                    DIALOG_MAX_PERCENT,
                    value
                );
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Modalist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate(&toml_content);

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("modalist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// Prefix every known key with its comment line
fn annotate(toml_content: &str) -> String {
    let mut annotated = String::with_capacity(toml_content.len() * 2);
    for line in toml_content.lines() {
        let key = line.split('=').next().unwrap_or_default().trim();
        if let Some((_, comment)) = FIELD_COMMENTS.iter().find(|(name, _)| *name == key) {
            annotated.push_str("# ");
            annotated.push_str(comment);
            annotated.push('\n');
        }
        annotated.push_str(line);
        annotated.push('\n');
    }
    annotated
}
