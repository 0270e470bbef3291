// SPDX-License-Identifier: GPL-3.0-only

//! Best available profile lookup

use super::QualityPreset;
use crate::backends::camera::{HardwareProfile, ProfileProvider};
use crate::errors::{ResolutionError, ResolutionResult};
use tracing::debug;

/// Get the best profile the camera offers at or below `preset`
///
/// Walks the hardware tiers from the preset's own tier downward and returns
/// the first one the camera reports. A camera lacking 2160p asked for
/// `UltraHigh` gets 1080p (or whatever it has below), never anything above
/// the request. When even the lowest tier is missing the camera cannot be
/// configured and [`ResolutionError::NoProfileAvailable`] is returned.
pub fn best_available_profile<P: ProfileProvider + ?Sized>(
    provider: &P,
    camera_id: u32,
    preset: QualityPreset,
) -> ResolutionResult<HardwareProfile> {
    let requested = preset.profile_tier();

    let tier = requested
        .at_or_below()
        .find(|tier| provider.has_profile(camera_id, *tier))
        .ok_or(ResolutionError::NoProfileAvailable { camera_id, preset })?;

    if tier != requested {
        debug!(
            camera_id,
            preset = %preset,
            requested = %requested,
            tier = %tier,
            "Falling back to lower profile tier"
        );
    }

    Ok(provider.get_profile(camera_id, tier)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::{ProfileTier, StaticProfileProvider, VideoProfile};

    fn provider_with(tiers: &[ProfileTier]) -> StaticProfileProvider {
        tiers.iter().fold(StaticProfileProvider::new(), |provider, tier| {
            let size = tier.nominal_size().map(|s| (s.width, s.height)).unwrap_or((640, 480));
            provider.with_profile(0, *tier, vec![VideoProfile::new(size.0, size.1)])
        })
    }

    #[test]
    fn test_exact_tier_is_used() {
        let provider = provider_with(&[ProfileTier::P1080, ProfileTier::P720]);
        let profile = best_available_profile(&provider, 0, QualityPreset::VeryHigh).unwrap();
        assert_eq!(profile.tier, ProfileTier::P1080);
    }

    #[test]
    fn test_missing_tier_degrades_downward() {
        let provider = provider_with(&[ProfileTier::P1080, ProfileTier::Qvga]);
        let profile = best_available_profile(&provider, 0, QualityPreset::UltraHigh).unwrap();
        assert_eq!(profile.tier, ProfileTier::P1080);

        let profile = best_available_profile(&provider, 0, QualityPreset::High).unwrap();
        assert_eq!(profile.tier, ProfileTier::Qvga);
    }

    #[test]
    fn test_never_picks_higher_tier() {
        let provider = provider_with(&[ProfileTier::Highest, ProfileTier::P2160]);
        assert_eq!(
            best_available_profile(&provider, 0, QualityPreset::VeryHigh),
            Err(ResolutionError::NoProfileAvailable {
                camera_id: 0,
                preset: QualityPreset::VeryHigh,
            })
        );
    }

    #[test]
    fn test_lowest_tier_is_last_resort() {
        let provider = provider_with(&[ProfileTier::Lowest]);
        let profile = best_available_profile(&provider, 0, QualityPreset::Max).unwrap();
        assert_eq!(profile.tier, ProfileTier::Lowest);
    }

    #[test]
    fn test_other_camera_has_no_profiles() {
        let provider = provider_with(&[ProfileTier::Lowest]);
        assert!(matches!(
            best_available_profile(&provider, 1, QualityPreset::Low),
            Err(ResolutionError::NoProfileAvailable { camera_id: 1, .. })
        ));
    }
}
