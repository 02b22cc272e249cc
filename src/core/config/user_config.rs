//! User configuration file handling
//!
//! Manages settings from ~/.config/circleplot/settings.json

use super::settings::OutputFormat;
use crate::core::errors::PlotContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User configuration from ~/.config/circleplot/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Real-space radius of the circle
    pub default_radius: Option<f64>,
    /// Container width in pixels
    pub container_width: Option<f64>,
    /// Container height in pixels
    pub container_height: Option<f64>,
    /// Headless output format ("text" or "json")
    pub output_format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Get the path to the circleplot config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("circleplot")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> anyhow::Result<Option<Self>> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file is `Ok(None)`; a file that cannot be read or parsed
    /// is an error naming the path.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        let config: Self = serde_json::from_str(&contents).with_file_context("parse", path)?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Configuration written by `--new-config`
    pub fn example() -> Self {
        Self {
            default_radius: Some(super::DEFAULT_RADIUS),
            container_width: Some(super::DEFAULT_CONTAINER_SIZE.width),
            container_height: Some(super::DEFAULT_CONTAINER_SIZE.height),
            output_format: Some(OutputFormat::Text),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/circleplot directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file`
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let config = ConfigFile {
            default_radius: Some(10.0),
            container_width: Some(300.0),
            container_height: None,
            output_format: Some(OutputFormat::Json),
        };

        config.save_to(&path).unwrap();

        assert_eq!(ConfigFile::load_from(&path).unwrap(), Some(config));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"output_format\": \"json\""));
    }

    #[test]
    fn missing_file_loads_nothing_and_broken_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(ConfigFile::load_from(&path).unwrap(), None);

        fs::write(&path, "{ not json").unwrap();
        let error = ConfigFile::load_from(&path).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn partial_file_leaves_other_fields_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "default_radius": 2.5 }"#).unwrap();

        let config = ConfigFile::load_from(&path).unwrap().unwrap();
        assert_eq!(config.default_radius, Some(2.5));
        assert_eq!(config.container_width, None);
        assert_eq!(config.output_format, None);
    }

    #[test]
    fn initialize_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        fs::write(&settings_path, r#"{ "default_radius": 7.0 }"#).unwrap();

        ConfigFile::initialize_in(dir.path()).unwrap();

        assert!(dir.path().join("logs").is_dir());
        let config = ConfigFile::load_from(&settings_path).unwrap().unwrap();
        assert_eq!(config.default_radius, Some(7.0));
    }
}
