// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use camera_resolution::backends::camera::{Dimensions, ProfileTier};
use camera_resolution::constants::{DEFAULT_PROFILE_SIZE, default_bitrate_kbps};

#[test]
fn test_fixed_tier_sizes_shrink_down_the_list() {
    let sizes: Vec<Dimensions> = ProfileTier::DESCENDING
        .iter()
        .filter_map(|tier| tier.nominal_size())
        .collect();

    assert_eq!(sizes.len(), 5);
    for pair in sizes.windows(2) {
        assert!(
            pair[0].area() > pair[1].area(),
            "{} should be larger than {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_default_profile_size_is_720p() {
    assert_eq!(DEFAULT_PROFILE_SIZE, Dimensions::new(1280, 720));
    assert_eq!(ProfileTier::P720.nominal_size(), Some(DEFAULT_PROFILE_SIZE));
}

#[test]
fn test_bitrate_scales_with_resolution() {
    let hd_bitrate = default_bitrate_kbps(1280);
    let fhd_bitrate = default_bitrate_kbps(1920);
    let uhd_bitrate = default_bitrate_kbps(3840);

    assert!(hd_bitrate < fhd_bitrate);
    assert!(fhd_bitrate < uhd_bitrate);
}
