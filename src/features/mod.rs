// SPDX-License-Identifier: GPL-3.0-only

//! Camera features
//!
//! A camera feature owns one user facing setting (resolution, flash, focus...)
//! for a single camera session. It knows whether the camera supports it, and
//! writes whatever it needs into the capture request before the session
//! starts.

pub mod resolution;

use crate::backends::camera::CaptureRequest;

/// Common interface of per-session camera features
pub trait CameraFeature {
    /// The setting this feature controls
    type Value: Copy;
    /// Error raised when applying a new value fails
    type Error: std::error::Error;

    /// Name used in logs
    fn debug_name(&self) -> &'static str;

    /// Current setting
    fn value(&self) -> Self::Value;

    /// Apply a new setting
    ///
    /// On an unsupported camera this is a no-op that returns `Ok(())`.
    fn set_value(&mut self, value: Self::Value) -> Result<(), Self::Error>;

    /// Whether the camera supports this feature
    fn is_supported(&self) -> bool;

    /// Write this feature's settings into a capture request
    fn update_request(&self, request: &mut CaptureRequest);
}
