use crate::core::notes::DEFAULT_PLACEHOLDER;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Time stamped on every row when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_time: Option<String>,
    pub notes_placeholder: String,
    pub atomic_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_time: None,
            notes_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            atomic_write: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pixels2moodistory")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        // An empty file deserializes to null; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))
    }

    /// Write a default configuration file. An existing file is left as is.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists, not overwriting",
                path.display()
            )));
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        fs::write(&path, Config::default().to_yaml()?)?;
        success(format!("Config file: {}", path.display()));
        Ok(path)
    }
}
