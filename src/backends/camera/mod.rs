// SPDX-License-Identifier: GPL-3.0-only

//! Camera profile provider abstraction
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ ResolutionSelector  │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ProfileProvider Trait│  ← Common interface
//! └──────────┬──────────┘
//!            │
//!      ┌─────┴──────┐
//!      ▼            ▼
//!  ┌────────┐   ┌──────┐
//!  │ Static │   │ V4L2 │  ← Concrete implementations
//!  └────────┘   └──────┘
//! ```

pub mod static_profiles;
pub mod types;
pub mod v4l2;

pub use static_profiles::StaticProfileProvider;
pub use types::*;
pub use v4l2::V4l2ProfileProvider;

use std::sync::Arc;

/// Source of hardware recording profiles and capture sizes
///
/// Implementations wrap whatever the platform offers (a profile table, V4L2
/// enumeration, a vendor API). Queries are synchronous and expected to be cheap.
pub trait ProfileProvider: Send + Sync {
    /// Check whether the camera reports a profile for `tier`
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool;

    /// Get the profile for `tier`
    ///
    /// Only defined when [`has_profile`](Self::has_profile) returned true for
    /// the same camera and tier; otherwise implementations return
    /// [`ProviderError::ProfileNotFound`].
    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile>;

    /// Get the still capture sizes the camera supports
    ///
    /// A failing sub-query degrades to an empty list inside the provider. An
    /// error means the camera itself could not be queried.
    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes>;
}

impl<P: ProfileProvider + ?Sized> ProfileProvider for &P {
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool {
        (**self).has_profile(camera_id, tier)
    }

    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile> {
        (**self).get_profile(camera_id, tier)
    }

    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes> {
        (**self).supported_capture_sizes(camera_id)
    }
}

impl<P: ProfileProvider + ?Sized> ProfileProvider for Box<P> {
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool {
        (**self).has_profile(camera_id, tier)
    }

    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile> {
        (**self).get_profile(camera_id, tier)
    }

    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes> {
        (**self).supported_capture_sizes(camera_id)
    }
}

impl<P: ProfileProvider + ?Sized> ProfileProvider for Arc<P> {
    fn has_profile(&self, camera_id: u32, tier: ProfileTier) -> bool {
        (**self).has_profile(camera_id, tier)
    }

    fn get_profile(&self, camera_id: u32, tier: ProfileTier) -> ProviderResult<HardwareProfile> {
        (**self).get_profile(camera_id, tier)
    }

    fn supported_capture_sizes(&self, camera_id: u32) -> ProviderResult<CaptureSizes> {
        (**self).supported_capture_sizes(camera_id)
    }
}

/// Tiers the camera reports, best first
pub fn available_tiers<P: ProfileProvider + ?Sized>(
    provider: &P,
    camera_id: u32,
) -> Vec<ProfileTier> {
    ProfileTier::DESCENDING
        .into_iter()
        .filter(|tier| provider.has_profile(camera_id, *tier))
        .collect()
}
