// SPDX-License-Identifier: GPL-3.0-only

//! Quality presets and aspect ratios

use crate::backends::camera::ProfileTier;
use crate::constants::aspect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform independent resolution quality, ordered from worst to best
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum QualityPreset {
    /// 240p (320x240)
    Low,
    /// 480p (720x480)
    Medium,
    /// 720p (1280x720)
    #[default]
    High,
    /// 1080p (1920x1080)
    VeryHigh,
    /// 2160p (3840x2160)
    UltraHigh,
    /// Highest resolution available
    Max,
}

impl QualityPreset {
    /// All presets, worst first
    pub const ALL: [QualityPreset; 6] = [
        QualityPreset::Low,
        QualityPreset::Medium,
        QualityPreset::High,
        QualityPreset::VeryHigh,
        QualityPreset::UltraHigh,
        QualityPreset::Max,
    ];

    /// Preset used for preview sizing; previews never go above High
    pub const PREVIEW_CEILING: QualityPreset = QualityPreset::High;

    pub fn name(&self) -> &'static str {
        match self {
            QualityPreset::Low => "low",
            QualityPreset::Medium => "medium",
            QualityPreset::High => "high",
            QualityPreset::VeryHigh => "veryHigh",
            QualityPreset::UltraHigh => "ultraHigh",
            QualityPreset::Max => "max",
        }
    }

    /// Hardware tier this preset asks for first
    pub fn profile_tier(&self) -> ProfileTier {
        match self {
            QualityPreset::Max => ProfileTier::Highest,
            QualityPreset::UltraHigh => ProfileTier::P2160,
            QualityPreset::VeryHigh => ProfileTier::P1080,
            QualityPreset::High => ProfileTier::P720,
            QualityPreset::Medium => ProfileTier::P480,
            QualityPreset::Low => ProfileTier::Qvga,
        }
    }

    /// This preset, lowered to [`Self::PREVIEW_CEILING`] if above it
    pub fn clamped_for_preview(self) -> QualityPreset {
        self.min(Self::PREVIEW_CEILING)
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QualityPreset {
    type Err = ParseSettingError;

    /// Accepts `veryHigh`, `very_high`, `very-high` and any casing of those
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        QualityPreset::ALL
            .into_iter()
            .find(|preset| preset.name().to_lowercase() == normalized)
            .ok_or_else(|| ParseSettingError::new("quality preset", s))
    }
}

/// Target frame aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Ratio16x9,
    #[serde(rename = "4:3")]
    Ratio4x3,
}

impl AspectRatio {
    /// Short side over long side
    pub fn scale(&self) -> f64 {
        match self {
            AspectRatio::Ratio16x9 => aspect::SCALE_16_9,
            AspectRatio::Ratio4x3 => aspect::SCALE_4_3,
        }
    }

    /// Width and height units (16 and 9, or 4 and 3)
    pub fn units(&self) -> (f64, f64) {
        match self {
            AspectRatio::Ratio16x9 => aspect::UNITS_16_9,
            AspectRatio::Ratio4x3 => aspect::UNITS_4_3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectRatio::Ratio16x9 => "16:9",
            AspectRatio::Ratio4x3 => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AspectRatio {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['x', '/'], ":").as_str() {
            "16:9" => Ok(AspectRatio::Ratio16x9),
            "4:3" => Ok(AspectRatio::Ratio4x3),
            _ => Err(ParseSettingError::new("aspect ratio", s)),
        }
    }
}

/// Error for unrecognized preset or aspect ratio names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSettingError {
    kind: &'static str,
    input: String,
}

impl ParseSettingError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseSettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseSettingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_ordered_by_quality() {
        for pair in QualityPreset::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_preview_clamp() {
        assert_eq!(QualityPreset::Max.clamped_for_preview(), QualityPreset::High);
        assert_eq!(
            QualityPreset::VeryHigh.clamped_for_preview(),
            QualityPreset::High
        );
        assert_eq!(QualityPreset::High.clamped_for_preview(), QualityPreset::High);
        assert_eq!(QualityPreset::Low.clamped_for_preview(), QualityPreset::Low);
    }

    #[test]
    fn test_preset_tiers() {
        assert_eq!(QualityPreset::Max.profile_tier(), ProfileTier::Highest);
        assert_eq!(QualityPreset::UltraHigh.profile_tier(), ProfileTier::P2160);
        assert_eq!(QualityPreset::Low.profile_tier(), ProfileTier::Qvga);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("veryHigh".parse(), Ok(QualityPreset::VeryHigh));
        assert_eq!("ULTRA_HIGH".parse(), Ok(QualityPreset::UltraHigh));
        assert_eq!("max".parse(), Ok(QualityPreset::Max));
        assert!("extreme".parse::<QualityPreset>().is_err());
    }

    #[test]
    fn test_preset_serde_names() {
        assert_eq!(
            serde_json::to_string(&QualityPreset::VeryHigh).unwrap(),
            "\"veryHigh\""
        );
        let preset: QualityPreset = serde_json::from_str("\"ultraHigh\"").unwrap();
        assert_eq!(preset, QualityPreset::UltraHigh);
    }

    #[test]
    fn test_aspect_ratio_parsing() {
        assert_eq!("16:9".parse(), Ok(AspectRatio::Ratio16x9));
        assert_eq!("4x3".parse(), Ok(AspectRatio::Ratio4x3));
        assert!("21:9".parse::<AspectRatio>().is_err());
        assert_eq!(
            serde_json::to_string(&AspectRatio::Ratio4x3).unwrap(),
            "\"4:3\""
        );
    }
}
