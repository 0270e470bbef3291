// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 profile provider
//!
//! Camera id `N` is the capture node `/dev/videoN`. Tiers and capture sizes are
//! derived from frame size and frame interval enumeration:
//!
//! - A fixed tier (720p, 1080p, ...) exists when its nominal size is offered
//! - `Highest` / `Lowest` are the largest / smallest offered sizes
//! - Sizes that cannot reach [`HIGH_RESOLUTION_MAX_FPS`] are high resolution
//!   capture sizes, everything else is standard

use super::ProfileProvider;
use super::types::*;
use crate::constants::{HIGH_RESOLUTION_MAX_FPS, default_bitrate_kbps};
use std::path::PathBuf;
use tracing::{debug, warn};
use v4l::prelude::*;
use v4l::video::Capture;

/// One frame size offered by the device, with the best framerate any pixel format reaches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMode {
    pub size: Dimensions,
    pub max_fps: u32,
    pub fourcc: String,
}

/// Profile provider querying V4L2 capture devices
#[derive(Debug, Clone)]
pub struct V4l2ProfileProvider {
    device_dir: PathBuf,
}

impl Default for V4l2ProfileProvider {
    fn default() -> Self {
        Self {
            device_dir: PathBuf::from("/dev"),
        }
    }
}

impl V4l2ProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for `videoN` nodes in another directory (e.g., a sandbox mount)
    pub fn with_device_dir(device_dir: impl Into<PathBuf>) -> Self {
        Self {
            device_dir: device_dir.into(),
        }
    }

    fn device_path(&self, camera_id: u32) -> PathBuf {
        self.device_dir.join(format!("video{}", camera_id))
    }

    /// Enumerate every frame size the device offers
    pub fn enumerate_modes(&self, camera_id: u32) -> ProviderResult<Vec<FrameMode>> {
        let path = self.device_path(camera_id);
        let dev = Device::with_path(&path)
            .map_err(|e| ProviderError::DeviceNotFound(format!("{}: {}", path.display(), e)))?;

        let format_descs = dev
            .enum_formats()
            .map_err(|e| ProviderError::QueryFailed(format!("{}: {}", path.display(), e)))?;

        let mut modes: Vec<FrameMode> = Vec::new();

        for fmt_desc in format_descs {
            let fourcc = format!("{:?}", fmt_desc.fourcc);
            let frame_sizes = match dev.enum_framesizes(fmt_desc.fourcc) {
                Ok(sizes) => sizes,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        fourcc = %fourcc,
                        error = %e,
                        "Frame size enumeration failed"
                    );
                    continue;
                }
            };

            for frame_size in frame_sizes {
                match frame_size.size {
                    v4l::framesize::FrameSizeEnum::Discrete(discrete) => {
                        let max_fps = match dev.enum_frameintervals(
                            fmt_desc.fourcc,
                            discrete.width,
                            discrete.height,
                        ) {
                            Ok(intervals) => best_fps(intervals.iter().map(|interval| {
                                match &interval.interval {
                                    v4l::frameinterval::FrameIntervalEnum::Discrete(frac) => {
                                        fraction_to_fps(frac.numerator, frac.denominator)
                                    }
                                    v4l::frameinterval::FrameIntervalEnum::Stepwise(step) => {
                                        fraction_to_fps(step.min.numerator, step.min.denominator)
                                    }
                                }
                            })),
                            Err(e) => {
                                debug!(
                                    path = %path.display(),
                                    fourcc = %fourcc,
                                    size = %Dimensions::new(discrete.width, discrete.height),
                                    error = %e,
                                    "Frame interval enumeration failed, assuming {} fps",
                                    UNKNOWN_FPS
                                );
                                UNKNOWN_FPS
                            }
                        };

                        merge_mode(
                            &mut modes,
                            FrameMode {
                                size: Dimensions::new(discrete.width, discrete.height),
                                max_fps,
                                fourcc: fourcc.clone(),
                            },
                        );
                    }
                    v4l::framesize::FrameSizeEnum::Stepwise(step) => {
                        // Only the tier sizes are interesting out of a continuous range
                        for tier in ProfileTier::DESCENDING {
                            let Some(size) = tier.nominal_size() else {
                                continue;
                            };
                            if on_step_grid(
                                size.width,
                                step.min_width,
                                step.max_width,
                                step.step_width,
                            ) && on_step_grid(
                                size.height,
                                step.min_height,
                                step.max_height,
                                step.step_height,
                            ) {
                                merge_mode(
                                    &mut modes,
                                    FrameMode {
                                        size,
                                        max_fps: UNKNOWN_FPS,
                                        fourcc: fourcc.clone(),
                                    },
                                );
                            }
                        }
                    }
                }
            }
        }

        debug!(path = %path.display(), modes = modes.len(), "Enumerated V4L2 frame sizes");
        Ok(modes)
    }
}

impl ProfileProvider for V4l2ProfileProvider {
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool {
        self.enumerate_modes(camera_id)
            .ok()
            .and_then(|modes| profile_for_tier(&modes, tier))
            .is_some()
    }

    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile> {
        let modes = self.enumerate_modes(camera_id)?;
        profile_for_tier(&modes, tier)
            .map(|video| HardwareProfile::new(tier, vec![video]))
            .ok_or_else(|| {
                ProviderError::ProfileNotFound(format!("camera {} tier {}", camera_id, tier))
            })
    }

    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes> {
        let modes = self.enumerate_modes(camera_id)?;
        Ok(classify_capture_sizes(&modes))
    }
}

/// Framerate assumed when the driver does not report a usable interval
const UNKNOWN_FPS: u32 = 30;

fn fraction_to_fps(numerator: u32, denominator: u32) -> u32 {
    if numerator > 0 {
        denominator / numerator
    } else {
        UNKNOWN_FPS
    }
}

/// Fastest reported framerate, or [`UNKNOWN_FPS`] when nothing usable was reported
fn best_fps(rates: impl IntoIterator<Item = u32>) -> u32 {
    rates
        .into_iter()
        .filter(|fps| *fps > 0)
        .max()
        .unwrap_or(UNKNOWN_FPS)
}

/// Whether `value` is one of the sizes a stepwise range can produce
fn on_step_grid(value: u32, min: u32, max: u32, step: u32) -> bool {
    if value < min || value > max {
        return false;
    }
    step == 0 || (value - min) % step == 0
}

/// Add a mode, keeping the faster pixel format when the size is already known
fn merge_mode(modes: &mut Vec<FrameMode>, mode: FrameMode) {
    if let Some(existing) = modes.iter_mut().find(|m| m.size == mode.size) {
        if mode.max_fps > existing.max_fps {
            *existing = mode;
        }
    } else {
        modes.push(mode);
    }
}

/// Pick the mode backing `tier`, if the device offers one
pub fn profile_for_tier(modes: &[FrameMode], tier: ProfileTier) -> Option<VideoProfile> {
    let mode = match tier {
        ProfileTier::Highest => modes.iter().max_by_key(|m| m.size.area()),
        ProfileTier::Lowest => modes.iter().min_by_key(|m| m.size.area()),
        fixed => {
            let nominal = fixed.nominal_size()?;
            modes.iter().find(|m| m.size == nominal)
        }
    }?;

    Some(VideoProfile {
        width: mode.size.width,
        height: mode.size.height,
        frame_rate: mode.max_fps,
        bitrate_kbps: default_bitrate_kbps(mode.size.width),
        codec: mode.fourcc.clone(),
    })
}

/// Split modes into high resolution and standard capture sizes, largest first
pub fn classify_capture_sizes(modes: &[FrameMode]) -> CaptureSizes {
    let mut sorted: Vec<&FrameMode> = modes.iter().collect();
    sorted.sort_by(|a, b| b.size.area().cmp(&a.size.area()));

    let (high, standard): (Vec<&FrameMode>, Vec<&FrameMode>) = sorted
        .into_iter()
        .partition(|m| m.max_fps < HIGH_RESOLUTION_MAX_FPS);

    CaptureSizes {
        high_resolution: high.into_iter().map(|m| m.size).collect(),
        standard: standard.into_iter().map(|m| m.size).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(width: u32, height: u32, max_fps: u32) -> FrameMode {
        FrameMode {
            size: Dimensions::new(width, height),
            max_fps,
            fourcc: "MJPG".to_string(),
        }
    }

    #[test]
    fn test_fixed_tier_requires_exact_size() {
        let modes = vec![mode(1920, 1080, 30), mode(640, 480, 30)];
        assert!(profile_for_tier(&modes, ProfileTier::P1080).is_some());
        assert!(profile_for_tier(&modes, ProfileTier::P720).is_none());
        // 640x480 is VGA, not the 720x480 of the 480p tier
        assert!(profile_for_tier(&modes, ProfileTier::P480).is_none());
    }

    #[test]
    fn test_relative_tiers_pick_extremes() {
        let modes = vec![mode(1280, 720, 30), mode(2592, 1944, 15), mode(320, 240, 30)];
        let highest = profile_for_tier(&modes, ProfileTier::Highest).unwrap();
        assert_eq!(highest.size(), Dimensions::new(2592, 1944));
        assert_eq!(highest.frame_rate, 15);
        let lowest = profile_for_tier(&modes, ProfileTier::Lowest).unwrap();
        assert_eq!(lowest.size(), Dimensions::new(320, 240));
    }

    #[test]
    fn test_no_modes_no_profiles() {
        for tier in ProfileTier::DESCENDING {
            assert!(profile_for_tier(&[], tier).is_none());
        }
    }

    #[test]
    fn test_classify_splits_on_framerate() {
        let modes = vec![
            mode(1280, 720, 30),
            mode(3264, 2448, 7),
            mode(1920, 1080, 30),
            mode(2592, 1944, 15),
        ];
        let sizes = classify_capture_sizes(&modes);
        assert_eq!(
            sizes.high_resolution,
            vec![Dimensions::new(3264, 2448), Dimensions::new(2592, 1944)]
        );
        assert_eq!(
            sizes.standard,
            vec![Dimensions::new(1920, 1080), Dimensions::new(1280, 720)]
        );
    }

    #[test]
    fn test_merge_keeps_fastest_format() {
        let mut modes = Vec::new();
        merge_mode(&mut modes, mode(1920, 1080, 5));
        merge_mode(
            &mut modes,
            FrameMode {
                size: Dimensions::new(1920, 1080),
                max_fps: 30,
                fourcc: "YUYV".to_string(),
            },
        );
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0].max_fps, 30);
        assert_eq!(modes[0].fourcc, "YUYV");
    }

    #[test]
    fn test_unknown_framerate_assumes_default() {
        assert_eq!(best_fps([]), UNKNOWN_FPS);
        assert_eq!(best_fps([0, 0]), UNKNOWN_FPS);
        assert_eq!(best_fps([15, 0, 7]), 15);
        assert_eq!(fraction_to_fps(0, 30), UNKNOWN_FPS);
        assert_eq!(fraction_to_fps(1, 60), 60);
    }

    #[test]
    fn test_unknown_framerate_is_standard_size() {
        let modes = vec![mode(640, 480, best_fps([])), mode(3264, 2448, 7)];
        let sizes = classify_capture_sizes(&modes);
        assert_eq!(sizes.high_resolution, vec![Dimensions::new(3264, 2448)]);
        assert_eq!(sizes.standard, vec![Dimensions::new(640, 480)]);

        let lowest = profile_for_tier(&modes, ProfileTier::Lowest).unwrap();
        assert_eq!(lowest.frame_rate, UNKNOWN_FPS);
    }

    #[test]
    fn test_step_grid_rejects_off_step_sizes() {
        // 16-pixel steps from 16 reach 1072 and 1088 but not 1080
        assert!(!on_step_grid(1080, 16, 2160, 16));
        assert!(on_step_grid(1088, 16, 2160, 16));
        assert!(on_step_grid(1920, 16, 3840, 16));
        assert!(on_step_grid(1080, 2, 2160, 2));
        assert!(!on_step_grid(4096, 16, 3840, 16));
        assert!(!on_step_grid(8, 16, 3840, 16));
        assert!(on_step_grid(1080, 1080, 1080, 0));
    }

    #[test]
    fn test_missing_device_is_not_found() {
        let provider = V4l2ProfileProvider::with_device_dir("/nonexistent-camera-dir");
        assert!(matches!(
            provider.enumerate_modes(0),
            Err(ProviderError::DeviceNotFound(_))
        ));
        assert!(!provider.has_profile(0, ProfileTier::Lowest));
    }
}
