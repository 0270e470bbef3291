// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for resolution queries
//!
//! This module provides command-line functionality for:
//! - Resolving capture and preview sizes for a camera
//! - Listing the profile tiers a camera reports

use camera_resolution::backends::camera::{
    ProfileProvider, StaticProfileProvider, V4l2ProfileProvider, available_tiers,
};
use camera_resolution::constants::get_resolution_label;
use camera_resolution::{AspectRatio, CameraFeature, Config, QualityPreset, ResolutionSelector};
use std::path::{Path, PathBuf};

/// Command line overrides for `resolve`
pub struct ResolveArgs {
    pub camera: Option<String>,
    pub preset: Option<String>,
    pub ratio: Option<String>,
    pub profiles: Option<PathBuf>,
    pub live: bool,
}

/// Resolve and print capture and preview sizes
pub fn resolve(config: &Config, args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let camera_name = args.camera.unwrap_or_else(|| config.camera_name.clone());
    let preset = match args.preset {
        Some(p) => p.parse::<QualityPreset>()?,
        None => config.resolution_preset,
    };
    let aspect_ratio = match args.ratio {
        Some(r) => r.parse::<AspectRatio>()?,
        None => config.aspect_ratio,
    };
    let live = args.live || config.live_capture_size;

    let provider = open_provider(args.profiles.as_deref().or(config.profile_table.as_deref()))?;
    let selector = ResolutionSelector::new(provider, preset, aspect_ratio, &camera_name)?;

    if !selector.is_supported() {
        println!(
            "Camera {:?} is not a numeric camera id, resolution selection is not supported.",
            camera_name
        );
        return Ok(());
    }

    println!(
        "Camera {} (preset {}, aspect ratio {})",
        camera_name,
        selector.value(),
        selector.aspect_ratio()
    );

    if let Some(profile) = selector.resolved_profile() {
        println!("Resolved profile: {}", profile.tier);
        for (index, video) in profile.video_profiles.iter().enumerate() {
            println!("  [{}] {}", index, video);
        }
    }

    if let Some(size) = selector.capture_size() {
        println!("Capture size: {}{}", size, label_suffix(size.width));
    }
    if let Some(size) = selector.preview_size() {
        println!("Preview size: {}{}", size, label_suffix(size.width));
    }
    if live && let Some(size) = selector.live_capture_size() {
        println!("Live capture size: {}{}", size, label_suffix(size.width));
    }

    Ok(())
}

/// List the tiers a camera reports
pub fn list_tiers(
    camera_id: u32,
    profiles: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = open_provider(profiles.as_deref())?;
    let tiers = available_tiers(&provider, camera_id);

    if tiers.is_empty() {
        println!("Camera {} reports no profiles.", camera_id);
        return Ok(());
    }

    println!("Profile tiers for camera {}:", camera_id);
    println!();
    for tier in tiers {
        match provider.get_profile(camera_id, tier) {
            Ok(profile) => {
                let sizes: Vec<String> = profile
                    .video_profiles
                    .iter()
                    .map(|video| video.to_string())
                    .collect();
                println!("  {:<8} {}", tier.display_name(), sizes.join(", "));
            }
            Err(e) => println!("  {:<8} (unavailable: {})", tier.display_name(), e),
        }
    }

    Ok(())
}

fn open_provider(
    profiles: Option<&Path>,
) -> Result<Box<dyn ProfileProvider>, Box<dyn std::error::Error>> {
    Ok(match profiles {
        Some(path) => Box::new(StaticProfileProvider::from_file(path)?),
        None => Box::new(V4l2ProfileProvider::new()),
    })
}

fn label_suffix(width: u32) -> String {
    get_resolution_label(width)
        .map(|label| format!(" ({})", label))
        .unwrap_or_default()
}
