// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as JSON in `<config dir>/camera-resolution/config.json`. A missing
//! file means defaults; missing fields take their default values.

use crate::constants::app_info;
use crate::errors::AppResult;
use crate::features::resolution::{AspectRatio, QualityPreset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera to configure (numeric camera id as a string)
    pub camera_name: String,
    /// Requested quality preset
    pub resolution_preset: QualityPreset,
    /// Requested aspect ratio
    pub aspect_ratio: AspectRatio,
    /// JSON profile table to use instead of querying V4L2 devices
    pub profile_table: Option<PathBuf>,
    /// Refine the capture size against the sizes the camera reports
    pub live_capture_size: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera_name: "0".to_string(),
            resolution_preset: QualityPreset::default(), // High
            aspect_ratio: AspectRatio::default(),        // 16:9
            profile_table: None,
            live_capture_size: false,
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(app_info::CONFIG_DIR_NAME)
                .join(app_info::CONFIG_FILE_NAME)
        })
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> AppResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "Saved config");
        Ok(())
    }
}
