// SPDX-License-Identifier: GPL-3.0-only

//! Profile provider backed by a fixed profile table
//!
//! The table is either built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "cameras": {
//!     "0": {
//!       "profiles": {
//!         "p1080": [{ "width": 1920, "height": 1080, "frame_rate": 30, "codec": "H264" }],
//!         "lowest": [{ "width": 320, "height": 240 }]
//!       },
//!       "capture_sizes": {
//!         "high_resolution": [{ "width": 4000, "height": 3000 }],
//!         "standard": [{ "width": 1920, "height": 1080 }]
//!       }
//!     }
//!   }
//! }
//! ```

use super::ProfileProvider;
use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Profiles and capture sizes of one camera
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCamera {
    /// Video configurations per tier; a present tier with no entries still counts as supported
    #[serde(default)]
    pub profiles: BTreeMap<ProfileTier, Vec<VideoProfile>>,
    #[serde(default)]
    pub capture_sizes: CaptureSizes,
}

/// Profile provider answering from an in-memory table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticProfileProvider {
    #[serde(default)]
    cameras: BTreeMap<u32, StaticCamera>,
}

impl StaticProfileProvider {
    /// Create an empty table (no camera has any profile)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a profile table from JSON
    pub fn from_json(json: &str) -> ProviderResult<Self> {
        let provider: Self = serde_json::from_str(json)?;
        debug!(cameras = provider.cameras.len(), "Parsed profile table");
        Ok(provider)
    }

    /// Load a profile table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let provider = Self::from_json(&json)?;
        info!(path = %path.display(), cameras = provider.cameras.len(), "Loaded profile table");
        Ok(provider)
    }

    /// Serialize the table back to pretty-printed JSON
    pub fn to_json(&self) -> ProviderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a profile for `tier`, replacing any previous one
    pub fn with_profile(
        mut self,
        camera_id: u32,
        tier: ProfileTier,
        video_profiles: Vec<VideoProfile>,
    ) -> Self {
        self.cameras
            .entry(camera_id)
            .or_default()
            .profiles
            .insert(tier, video_profiles);
        self
    }

    /// Set the still capture sizes of a camera
    pub fn with_capture_sizes(mut self, camera_id: u32, capture_sizes: CaptureSizes) -> Self {
        self.cameras.entry(camera_id).or_default().capture_sizes = capture_sizes;
        self
    }

    /// Camera ids present in the table
    pub fn camera_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.cameras.keys().copied()
    }
}

impl ProfileProvider for StaticProfileProvider {
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool {
        self.cameras
            .get(&camera_id)
            .is_some_and(|camera| camera.profiles.contains_key(&tier))
    }

    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile> {
        let camera = self
            .cameras
            .get(&camera_id)
            .ok_or_else(|| ProviderError::DeviceNotFound(format!("camera {}", camera_id)))?;

        camera
            .profiles
            .get(&tier)
            .map(|video_profiles| HardwareProfile::new(tier, video_profiles.clone()))
            .ok_or_else(|| {
                ProviderError::ProfileNotFound(format!("camera {} tier {}", camera_id, tier))
            })
    }

    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes> {
        self.cameras
            .get(&camera_id)
            .map(|camera| camera.capture_sizes.clone())
            .ok_or_else(|| ProviderError::DeviceNotFound(format!("camera {}", camera_id)))
    }
}
