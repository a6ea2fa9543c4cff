//! Tab strip configuration management.
//!
//! This module provides configuration loading, saving, and default values
//! for the browser shell's tab strip.

use crate::error::ConfigError;
use crate::types::AnimationConfig;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_yaml_ng as serde_yaml;
use std::fs;
use std::path::{Path, PathBuf};

/// Tab strip configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Height of the tab strip, in logical pixels
    pub tab_bar_height: f32,
    /// Width a tab settles at when the strip has room (the stable tab width)
    pub tab_normal_width: f32,
    /// Fixed width of a pinned tab
    pub tab_pinned_width: f32,
    /// Width reserved for the new-tab (+) button at the end of the strip
    pub new_tab_button_width: f32,
    /// Address loaded into a freshly created tab
    pub new_tab_address: String,
    /// Seconds of inactivity before the strip opens a tab on its own
    pub auto_new_tab_delay: f32,
    /// Maximum number of remembered closed tabs
    pub max_closed_tabs: usize,
    /// Animation timing
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_bar_height: 42.0,
            tab_normal_width: 190.0,
            tab_pinned_width: 32.0,
            new_tab_button_width: 28.0,
            new_tab_address: "about:blank".to_string(),
            auto_new_tab_delay: 30.0,
            max_closed_tabs: 25,
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading config from {:?}", path);
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::Parse)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Default config file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skiff")
            .join("config.yaml")
    }

    /// Check field values for semantic validity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.positioning_duration <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "animation.positioning_duration must be positive, got {}",
                self.animation.positioning_duration
            )));
        }
        if self.animation.background_duration <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "animation.background_duration must be positive, got {}",
                self.animation.background_duration
            )));
        }
        if self.tab_normal_width <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "tab_normal_width must be positive, got {}",
                self.tab_normal_width
            )));
        }
        if self.tab_pinned_width <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "tab_pinned_width must be positive, got {}",
                self.tab_pinned_width
            )));
        }
        if self.new_tab_button_width < 0.0 {
            return Err(ConfigError::Validation(format!(
                "new_tab_button_width must not be negative, got {}",
                self.new_tab_button_width
            )));
        }
        Ok(())
    }
}
