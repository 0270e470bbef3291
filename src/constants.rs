// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use crate::backends::camera::Dimensions;

/// Frame size used when a resolved profile carries no video configuration
pub const DEFAULT_PROFILE_SIZE: Dimensions = Dimensions::new(1280, 720);

/// Sizes whose best framerate stays below this are high resolution capture sizes
pub const HIGH_RESOLUTION_MAX_FPS: u32 = 20;

/// Nominal frame sizes of the fixed profile tiers
pub mod tier_sizes {
    use crate::backends::camera::Dimensions;

    pub const P2160: Dimensions = Dimensions::new(3840, 2160);
    pub const P1080: Dimensions = Dimensions::new(1920, 1080);
    pub const P720: Dimensions = Dimensions::new(1280, 720);
    pub const P480: Dimensions = Dimensions::new(720, 480);
    pub const QVGA: Dimensions = Dimensions::new(320, 240);
}

/// Aspect ratio scale factors and units
///
/// Kept as `f32` fractions widened to `f64` so computed sizes match other
/// platforms bit for bit.
pub mod aspect {
    /// Short side over long side for 16:9
    pub const SCALE_16_9: f64 = (9.0f32 / 16.0f32) as f64;

    /// Short side over long side for 4:3
    pub const SCALE_4_3: f64 = (3.0f32 / 4.0f32) as f64;

    /// Width and height units for 16:9
    pub const UNITS_16_9: (f64, f64) = (16.0, 9.0);

    /// Width and height units for 4:3
    pub const UNITS_4_3: (f64, f64) = (4.0, 3.0);
}

/// Typical recording bitrate in kbps for a frame width
///
/// - SD (640x480 and below): 2 Mbps
/// - HD (1280x720): 5 Mbps
/// - Full HD (1920x1080): 8 Mbps
/// - 2K (2560x1440): 16 Mbps
/// - 4K (3840x2160 and above): 30 Mbps
pub fn default_bitrate_kbps(width: u32) -> u32 {
    match width {
        w if w >= 3840 => 30_000,
        w if w >= 2560 => 16_000,
        w if w >= 1920 => 8_000,
        w if w >= 1280 => 5_000,
        _ => 2_000,
    }
}

/// Resolution labels for display
pub fn get_resolution_label(width: u32) -> Option<&'static str> {
    match width {
        w if w >= 7680 => Some("8K"), // 7680x4320
        w if w >= 6144 => Some("6K"), // 6144x3456
        w if w >= 5120 => Some("5K"), // 5120x2880
        w if w >= 3840 => Some("4K"), // 3840x2160
        w if w >= 2560 => Some("2K"), // 2560x1440
        w if w >= 1920 => Some("HD"), // 1920x1080
        w if w >= 640 => Some("SD"),  // 640x480
        _ => None,
    }
}

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Name of the configuration directory under the user config dir
    pub const CONFIG_DIR_NAME: &str = "camera-resolution";

    /// Configuration file name
    pub const CONFIG_FILE_NAME: &str = "config.json";
}
