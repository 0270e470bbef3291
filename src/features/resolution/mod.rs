// SPDX-License-Identifier: GPL-3.0-only

//! Resolution feature
//!
//! Converts a [`QualityPreset`] into the best recording profile a camera
//! reports and derives the capture and preview sizes for the requested
//! [`AspectRatio`].
//!
//! Sizing keeps the profile's longest side and recomputes the other one from
//! the aspect ratio, so a 1920x1200 profile at 16:9 yields 1920x1080 and a
//! portrait 480x640 profile at 4:3 stays 480x640. Previews are sized from the
//! preset clamped to [`QualityPreset::High`].

mod fallback;
mod preset;

pub use fallback::best_available_profile;
pub use preset::{AspectRatio, ParseSettingError, QualityPreset};

use super::CameraFeature;
use crate::backends::camera::{
    CaptureRequest, CaptureSizes, Dimensions, HardwareProfile, ProfileProvider,
};
use crate::constants::DEFAULT_PROFILE_SIZE;
use crate::errors::{ResolutionError, ResolutionResult};
use tracing::{debug, info, warn};

/// Resolution state of one camera session
///
/// Constructed with a camera name; names that are not a non-negative decimal
/// integer leave the selector unsupported, with every size and profile unset.
pub struct ResolutionSelector<P: ProfileProvider> {
    provider: P,
    camera_id: Option<u32>,
    preset: QualityPreset,
    aspect_ratio: AspectRatio,
    resolved_profile: Option<HardwareProfile>,
    capture_size: Option<Dimensions>,
    preview_size: Option<Dimensions>,
}

impl<P: ProfileProvider> ResolutionSelector<P> {
    /// Create the selector and compute the initial sizes
    ///
    /// # Errors
    /// [`ResolutionError::NoProfileAvailable`] when the camera offers no
    /// profile at or below `preset`. An unparsable `camera_name` is not an
    /// error: the selector is returned unsupported.
    pub fn new(
        provider: P,
        preset: QualityPreset,
        aspect_ratio: AspectRatio,
        camera_name: &str,
    ) -> ResolutionResult<Self> {
        let camera_id = parse_camera_id(camera_name);

        let mut selector = Self {
            provider,
            camera_id,
            preset,
            aspect_ratio,
            resolved_profile: None,
            capture_size: None,
            preview_size: None,
        };

        if camera_id.is_none() {
            debug!(camera_name, "Camera name is not a numeric id, resolution feature disabled");
            return Ok(selector);
        }

        selector.configure()?;
        Ok(selector)
    }

    /// Parsed camera id, `None` when unsupported
    pub fn camera_id(&self) -> Option<u32> {
        self.camera_id
    }

    pub fn preset(&self) -> QualityPreset {
        self.preset
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Switch presets and recompute both sizes
    ///
    /// The preset is stored even if recomputation fails; the sizes and
    /// profile then keep their previous values.
    pub fn set_preset(&mut self, preset: QualityPreset) -> ResolutionResult<()> {
        self.preset = preset;
        self.configure()
    }

    /// Switch aspect ratios and recompute both sizes
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) -> ResolutionResult<()> {
        self.aspect_ratio = aspect_ratio;
        self.configure()
    }

    /// Recording profile resolved for the current preset
    pub fn resolved_profile(&self) -> Option<&HardwareProfile> {
        self.resolved_profile.as_ref()
    }

    /// Capture size computed for the current preset
    pub fn capture_size(&self) -> Option<Dimensions> {
        self.capture_size
    }

    /// Preview size computed for the current preset, clamped to High
    pub fn preview_size(&self) -> Option<Dimensions> {
        self.preview_size
    }

    /// Capture size refined against the sizes the camera reports right now
    ///
    /// Returns the first reported size with exactly the configured aspect
    /// ratio, high resolution sizes first. Falls back to
    /// [`capture_size`](Self::capture_size) when nothing matches or the
    /// camera cannot be queried.
    pub fn live_capture_size(&self) -> Option<Dimensions> {
        let camera_id = self.camera_id?;

        match self.provider.supported_capture_sizes(camera_id) {
            Ok(sizes) => {
                debug!(
                    camera_id,
                    high_resolution = ?sizes.high_resolution,
                    standard = ?sizes.standard,
                    "Supported capture sizes"
                );
                first_eligible_size(&sizes, self.aspect_ratio).or(self.capture_size)
            }
            Err(e) => {
                warn!(camera_id, error = %e, "Failed to query capture sizes, using computed size");
                self.capture_size
            }
        }
    }

    /// Recompute profile and sizes; commits only when both queries succeed
    fn configure(&mut self) -> ResolutionResult<()> {
        let Some(camera_id) = self.camera_id else {
            return Ok(());
        };

        let profile = best_available_profile(&self.provider, camera_id, self.preset)?;
        let capture_size = size_for_profile(&profile, self.aspect_ratio);
        let preview_size =
            compute_best_preview_size(&self.provider, camera_id, self.preset, self.aspect_ratio)?;

        info!(
            camera_id,
            preset = %self.preset,
            aspect_ratio = %self.aspect_ratio,
            tier = %profile.tier,
            capture = %capture_size,
            preview = %preview_size,
            "Configured resolution"
        );

        self.resolved_profile = Some(profile);
        self.capture_size = Some(capture_size);
        self.preview_size = Some(preview_size);
        Ok(())
    }
}

impl<P: ProfileProvider> CameraFeature for ResolutionSelector<P> {
    type Value = QualityPreset;
    type Error = ResolutionError;

    fn debug_name(&self) -> &'static str {
        "ResolutionFeature"
    }

    fn value(&self) -> QualityPreset {
        self.preset
    }

    fn set_value(&mut self, value: QualityPreset) -> ResolutionResult<()> {
        self.set_preset(value)
    }

    fn is_supported(&self) -> bool {
        self.camera_id.is_some()
    }

    fn update_request(&self, _request: &mut CaptureRequest) {
        // Resolution is applied through the session's output sizes, not the request
    }
}

impl<P: ProfileProvider> std::fmt::Debug for ResolutionSelector<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionSelector")
            .field("camera_id", &self.camera_id)
            .field("preset", &self.preset)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("capture_size", &self.capture_size)
            .field("preview_size", &self.preview_size)
            .finish_non_exhaustive()
    }
}

/// Parse a camera name into a camera id
///
/// Only non-negative decimal integers are camera ids.
pub fn parse_camera_id(camera_name: &str) -> Option<u32> {
    camera_name.parse::<u32>().ok()
}

/// Preview size for `preset`, computed from the preset clamped to High
pub fn compute_best_preview_size<P: ProfileProvider + ?Sized>(
    provider: &P,
    camera_id: u32,
    preset: QualityPreset,
    aspect_ratio: AspectRatio,
) -> ResolutionResult<Dimensions> {
    let profile = best_available_profile(provider, camera_id, preset.clamped_for_preview())?;
    Ok(size_for_profile(&profile, aspect_ratio))
}

/// Frame size for a profile at `aspect_ratio`
///
/// Uses the default video configuration, or 1280x720 if the profile has none.
pub fn size_for_profile(profile: &HardwareProfile, aspect_ratio: AspectRatio) -> Dimensions {
    let size = profile
        .default_video_profile()
        .map(|video| video.size())
        .unwrap_or(DEFAULT_PROFILE_SIZE);
    scale_to_aspect_ratio(size, aspect_ratio)
}

/// Keep the longest side of `size` and derive the other from `aspect_ratio`
///
/// Landscape and square sizes keep their width, portrait sizes their height.
/// The derived side is rounded half up.
pub fn scale_to_aspect_ratio(size: Dimensions, aspect_ratio: AspectRatio) -> Dimensions {
    let max_size = size.max_side();
    let short_side = (max_size as f64 * aspect_ratio.scale()).round() as u32;

    if max_size == size.width {
        Dimensions::new(max_size, short_side)
    } else {
        Dimensions::new(short_side, max_size)
    }
}

/// Whether `size` has exactly the given aspect ratio
pub fn matches_aspect_ratio(size: Dimensions, aspect_ratio: AspectRatio) -> bool {
    let (width_unit, height_unit) = aspect_ratio.units();
    size.width as f64 / width_unit == size.height as f64 / height_unit
}

/// First size with exactly `aspect_ratio`, searching high resolution sizes first
pub fn first_eligible_size(sizes: &CaptureSizes, aspect_ratio: AspectRatio) -> Option<Dimensions> {
    sizes
        .iter()
        .copied()
        .find(|size| matches_aspect_ratio(*size, aspect_ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::{ProfileTier, VideoProfile};

    #[test]
    fn test_scale_landscape_16_9() {
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(1920, 1080), AspectRatio::Ratio16x9),
            Dimensions::new(1920, 1080)
        );
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(1920, 1440), AspectRatio::Ratio16x9),
            Dimensions::new(1920, 1080)
        );
    }

    #[test]
    fn test_scale_landscape_4_3() {
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(640, 480), AspectRatio::Ratio4x3),
            Dimensions::new(640, 480)
        );
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(1280, 720), AspectRatio::Ratio4x3),
            Dimensions::new(1280, 960)
        );
    }

    #[test]
    fn test_scale_portrait_keeps_height() {
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(480, 640), AspectRatio::Ratio4x3),
            Dimensions::new(480, 640)
        );
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(720, 1280), AspectRatio::Ratio16x9),
            Dimensions::new(720, 1280)
        );
    }

    #[test]
    fn test_scale_square_treated_as_landscape() {
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(1000, 1000), AspectRatio::Ratio16x9),
            Dimensions::new(1000, 563)
        );
    }

    #[test]
    fn test_scale_rounds_half_up() {
        // 1002 * 0.5625 = 563.625, 328 * 0.5625 = 184.5
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(1002, 10), AspectRatio::Ratio16x9).height,
            564
        );
        assert_eq!(
            scale_to_aspect_ratio(Dimensions::new(328, 10), AspectRatio::Ratio16x9).height,
            185
        );
    }

    #[test]
    fn test_profile_without_video_uses_default_size() {
        let profile = HardwareProfile::new(ProfileTier::P720, vec![]);
        assert_eq!(
            size_for_profile(&profile, AspectRatio::Ratio4x3),
            Dimensions::new(1280, 960)
        );
    }

    #[test]
    fn test_first_video_profile_is_used() {
        let profile = HardwareProfile::new(
            ProfileTier::Highest,
            vec![VideoProfile::new(3840, 2160), VideoProfile::new(1280, 720)],
        );
        assert_eq!(
            size_for_profile(&profile, AspectRatio::Ratio16x9),
            Dimensions::new(3840, 2160)
        );
    }

    #[test]
    fn test_aspect_ratio_match_is_exact() {
        assert!(matches_aspect_ratio(Dimensions::new(1600, 900), AspectRatio::Ratio16x9));
        assert!(!matches_aspect_ratio(Dimensions::new(1920, 1200), AspectRatio::Ratio16x9));
        assert!(matches_aspect_ratio(Dimensions::new(4000, 3000), AspectRatio::Ratio4x3));
        // 1366x768 is marketed as 16:9 but is not exact
        assert!(!matches_aspect_ratio(Dimensions::new(1366, 768), AspectRatio::Ratio16x9));
    }

    #[test]
    fn test_first_eligible_prefers_high_resolution() {
        let sizes = CaptureSizes {
            high_resolution: vec![Dimensions::new(4000, 3000), Dimensions::new(3840, 2160)],
            standard: vec![Dimensions::new(1920, 1080)],
        };
        assert_eq!(
            first_eligible_size(&sizes, AspectRatio::Ratio16x9),
            Some(Dimensions::new(3840, 2160))
        );
        assert_eq!(
            first_eligible_size(&sizes, AspectRatio::Ratio4x3),
            Some(Dimensions::new(4000, 3000))
        );
        assert_eq!(first_eligible_size(&CaptureSizes::default(), AspectRatio::Ratio4x3), None);
    }

    #[test]
    fn test_camera_id_parsing() {
        assert_eq!(parse_camera_id("0"), Some(0));
        assert_eq!(parse_camera_id("12"), Some(12));
        assert_eq!(parse_camera_id("frontCam"), None);
        assert_eq!(parse_camera_id("-1"), None);
        assert_eq!(parse_camera_id(""), None);
    }
}
