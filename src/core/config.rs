use crate::core::conversion::ConversionDirection;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_RAW_PRECISION: usize = 5;
// The third decimal digit must stay visible in the raw value.
const MIN_RAW_PRECISION: usize = 3;
const MAX_RAW_PRECISION: usize = 12;

fn default_raw_precision() -> usize {
    DEFAULT_RAW_PRECISION
}

/// Presentation preferences. Nothing here changes how amounts are converted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub default_direction: ConversionDirection,
    #[serde(default = "default_raw_precision")]
    pub raw_precision: usize,
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_direction: ConversionDirection::default(),
            raw_precision: DEFAULT_RAW_PRECISION,
            history_limit: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("bg", "bgneur", "bgneur")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Decimals used when displaying the unrounded value.
    pub fn raw_precision(&self) -> usize {
        self.raw_precision.clamp(MIN_RAW_PRECISION, MAX_RAW_PRECISION)
    }
}
