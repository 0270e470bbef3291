// SPDX-License-Identifier: GPL-3.0-only
// Shared types for profile provider abstraction

//! Shared types for profile providers

use crate::constants::tier_sizes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frame dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Longest side (width for landscape and square, height for portrait)
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Hardware recording quality tier
///
/// Tiers are declared from best to worst. `Highest` and `Lowest` are relative
/// to the device: they stand for the best and worst profile it offers, whatever
/// the size. The others are fixed video standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTier {
    /// Best profile the device offers
    Highest,
    /// 2160p (3840x2160)
    P2160,
    /// 1080p (1920x1080)
    P1080,
    /// 720p (1280x720)
    P720,
    /// 480p (720x480)
    P480,
    /// QVGA (320x240)
    Qvga,
    /// Worst profile the device offers
    Lowest,
}

impl ProfileTier {
    /// All tiers, best first. Profile fallback walks this list downward.
    pub const DESCENDING: [ProfileTier; 7] = [
        ProfileTier::Highest,
        ProfileTier::P2160,
        ProfileTier::P1080,
        ProfileTier::P720,
        ProfileTier::P480,
        ProfileTier::Qvga,
        ProfileTier::Lowest,
    ];

    /// Get display name for the tier
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileTier::Highest => "Highest",
            ProfileTier::P2160 => "2160p",
            ProfileTier::P1080 => "1080p",
            ProfileTier::P720 => "720p",
            ProfileTier::P480 => "480p",
            ProfileTier::Qvga => "QVGA",
            ProfileTier::Lowest => "Lowest",
        }
    }

    /// Nominal frame size of a fixed tier, `None` for the device-relative ones
    pub fn nominal_size(&self) -> Option<Dimensions> {
        match self {
            ProfileTier::Highest | ProfileTier::Lowest => None,
            ProfileTier::P2160 => Some(tier_sizes::P2160),
            ProfileTier::P1080 => Some(tier_sizes::P1080),
            ProfileTier::P720 => Some(tier_sizes::P720),
            ProfileTier::P480 => Some(tier_sizes::P480),
            ProfileTier::Qvga => Some(tier_sizes::QVGA),
        }
    }

    /// Tiers from this one down to the lowest, inclusive
    pub fn at_or_below(self) -> impl Iterator<Item = ProfileTier> {
        Self::DESCENDING.into_iter().skip_while(move |tier| *tier != self)
    }
}

impl std::fmt::Display for ProfileTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One video encoding configuration inside a hardware profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoProfile {
    pub width: u32,
    pub height: u32,
    /// Frames per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Target bitrate in kbps, 0 if unknown
    #[serde(default)]
    pub bitrate_kbps: u32,
    /// Codec or FourCC name (e.g., "H264", "MJPG")
    #[serde(default)]
    pub codec: String,
}

fn default_frame_rate() -> u32 {
    30
}

impl VideoProfile {
    /// Create a 30fps video profile with unknown bitrate and codec
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_rate: default_frame_rate(),
            bitrate_kbps: 0,
            codec: String::new(),
        }
    }

    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl std::fmt::Display for VideoProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} @ {}fps", self.width, self.height, self.frame_rate)?;
        if !self.codec.is_empty() {
            write!(f, " {}", self.codec)?;
        }
        if self.bitrate_kbps > 0 {
            write!(f, " ({} kbps)", self.bitrate_kbps)?;
        }
        Ok(())
    }
}

/// Recording profile reported by the hardware for one tier
///
/// A profile may carry several video configurations; the first one is the
/// default used for sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub tier: ProfileTier,
    pub video_profiles: Vec<VideoProfile>,
}

impl HardwareProfile {
    pub fn new(tier: ProfileTier, video_profiles: Vec<VideoProfile>) -> Self {
        Self {
            tier,
            video_profiles,
        }
    }

    /// The default (first) video configuration, if any
    pub fn default_video_profile(&self) -> Option<&VideoProfile> {
        self.video_profiles.first()
    }
}

/// Still capture output sizes reported by a camera
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSizes {
    /// Sizes only available at reduced frame rates
    #[serde(default)]
    pub high_resolution: Vec<Dimensions>,
    /// Sizes available at full frame rate
    #[serde(default)]
    pub standard: Vec<Dimensions>,
}

impl CaptureSizes {
    pub fn is_empty(&self) -> bool {
        self.high_resolution.is_empty() && self.standard.is_empty()
    }

    /// High resolution sizes first, then standard ones
    pub fn iter(&self) -> impl Iterator<Item = &Dimensions> {
        self.high_resolution.iter().chain(self.standard.iter())
    }
}

/// Capture request settings handed to camera features before a session starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureRequest {
    settings: BTreeMap<String, String>,
}

impl CaptureRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Camera device not found
    DeviceNotFound(String),
    /// Profile for the requested tier does not exist
    ProfileNotFound(String),
    /// The device could not be queried
    QueryFailed(String),
    /// Profile data could not be parsed
    InvalidData(String),
    /// General I/O error
    IoError(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::DeviceNotFound(msg) => write!(f, "Device not found: {}", msg),
            ProviderError::ProfileNotFound(msg) => write!(f, "Profile not found: {}", msg),
            ProviderError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
            ProviderError::InvalidData(msg) => write!(f, "Invalid profile data: {}", msg),
            ProviderError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_at_or_below_start_at_requested_tier() {
        let tiers: Vec<_> = ProfileTier::P1080.at_or_below().collect();
        assert_eq!(
            tiers,
            vec![
                ProfileTier::P1080,
                ProfileTier::P720,
                ProfileTier::P480,
                ProfileTier::Qvga,
                ProfileTier::Lowest,
            ]
        );
        assert_eq!(
            ProfileTier::Lowest.at_or_below().collect::<Vec<_>>(),
            vec![ProfileTier::Lowest]
        );
    }

    #[test]
    fn test_descending_order_matches_ord() {
        let mut sorted = ProfileTier::DESCENDING;
        sorted.sort();
        assert_eq!(sorted, ProfileTier::DESCENDING);
    }

    #[test]
    fn test_relative_tiers_have_no_nominal_size() {
        assert_eq!(ProfileTier::Highest.nominal_size(), None);
        assert_eq!(ProfileTier::Lowest.nominal_size(), None);
        assert_eq!(
            ProfileTier::P720.nominal_size(),
            Some(Dimensions::new(1280, 720))
        );
    }

    #[test]
    fn test_capture_sizes_iterate_high_resolution_first() {
        let sizes = CaptureSizes {
            high_resolution: vec![Dimensions::new(4000, 3000)],
            standard: vec![Dimensions::new(1920, 1080)],
        };
        let order: Vec<_> = sizes.iter().copied().collect();
        assert_eq!(
            order,
            vec![Dimensions::new(4000, 3000), Dimensions::new(1920, 1080)]
        );
    }

    #[test]
    fn test_video_profile_display() {
        let profile = VideoProfile {
            width: 1920,
            height: 1080,
            frame_rate: 30,
            bitrate_kbps: 8000,
            codec: "H264".to_string(),
        };
        assert_eq!(profile.to_string(), "1920x1080 @ 30fps H264 (8000 kbps)");
    }
}
