use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User defaults for the report options.
///
/// Every field is optional in the YAML file; command-line flags always
/// take precedence over these values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_accumulate")]
    pub accumulate: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_group")]
    pub group: Vec<String>,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    /// Extra chrono format strings tried before the built-in date layouts
    #[serde(default)]
    pub date_formats: Vec<String>,
}

fn default_accumulate() -> String {
    "Hours".to_string()
}
fn default_date() -> String {
    "Work date".to_string()
}
fn default_group() -> Vec<String> {
    vec!["Username".to_string()]
}
fn default_hours_per_day() -> f64 {
    8.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accumulate: default_accumulate(),
            date: default_date(),
            group: default_group(),
            hours_per_day: default_hours_per_day(),
            date_formats: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtempo")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtempo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtempo.conf")
    }

    /// Load configuration from `custom` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        // an empty file is a valid, all-default configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        if !(cfg.hours_per_day.is_finite() && cfg.hours_per_day > 0.0) {
            return Err(format!(
                "hours_per_day must be a positive number, got {}",
                cfg.hours_per_day
            ));
        }

        Ok(cfg)
    }
}
