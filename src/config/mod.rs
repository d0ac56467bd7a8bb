//! Configuration management module.
//!
//! This module loads the optional configuration file: theme, toast placement
//! and timing, and log level. The file is only ever read; entered form
//! values are never written anywhere.

mod error;

pub use error::ConfigError;

use crate::state::{ToastPosition, DEFAULT_TOAST_DURATION_MS};
use crate::ui::Theme;
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/welcome-form";

/// Oversees the application configuration.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub theme_name: String,
    pub toast_position: ToastPosition,
    pub toast_duration_ms: u64,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub toast_position: ToastPosition,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            toast_position: ToastPosition::default(),
            toast_duration_ms: default_toast_duration_ms(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default directory otherwise. A missing file leaves the defaults
    /// in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), ConfigError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents =
                fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                    path: file_path.clone(),
                    source: e,
                })?;
            self.apply_yaml(&contents)?;
        }
        self.file_path = Some(file_path);
        Ok(())
    }

    /// Overwrite settings with the values found in the YAML document.
    /// Missing keys fall back to their defaults.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.toast_position = data.toast_position;
        self.toast_duration_ms = data.toast_duration_ms;
        self.log_level = data.log_level;
        Ok(())
    }

    /// Returns the path of the configuration file once `load` has run.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Resolve the configured theme.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name).ok_or_else(|| ConfigError::UnknownTheme {
            name: self.theme_name.clone(),
            available: Theme::available_themes().join(", "),
        })
    }

    /// Parse the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
