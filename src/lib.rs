// SPDX-License-Identifier: GPL-3.0-only

//! Camera resolution selection
//!
//! This library maps a platform independent [`QualityPreset`] onto the best
//! recording profile a camera reports, and derives capture and preview sizes
//! for a target [`AspectRatio`].
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`backends`]: Profile provider abstraction and concrete providers
//! - [`features`]: Camera features, including the [`ResolutionSelector`]
//! - [`config`]: User configuration handling
//! - [`constants`]: Tier sizes, scale constants and labels
//! - [`errors`]: Error types
//!
//! # Example
//!
//! ```
//! use camera_resolution::backends::camera::{
//!     Dimensions, ProfileTier, StaticProfileProvider, VideoProfile,
//! };
//! use camera_resolution::{AspectRatio, QualityPreset, ResolutionSelector};
//!
//! let provider = StaticProfileProvider::new()
//!     .with_profile(0, ProfileTier::P1080, vec![VideoProfile::new(1920, 1080)]);
//!
//! let selector =
//!     ResolutionSelector::new(&provider, QualityPreset::Max, AspectRatio::Ratio16x9, "0")
//!         .unwrap();
//! assert_eq!(selector.capture_size(), Some(Dimensions::new(1920, 1080)));
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod features;

// Re-export commonly used types
pub use backends::camera::ProfileProvider;
pub use config::Config;
pub use features::CameraFeature;
pub use features::resolution::{AspectRatio, QualityPreset, ResolutionSelector};
