// SPDX-License-Identifier: GPL-3.0-only

//! Error types for resolution selection

use crate::backends::camera::ProviderError;
use crate::features::resolution::QualityPreset;
use std::fmt;

/// Result type alias using ResolutionError
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while resolving a profile for a camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// No profile exists at or below the requested preset
    NoProfileAvailable {
        camera_id: u32,
        preset: QualityPreset,
    },
    /// The provider failed while fetching a profile it reported as available
    Provider(ProviderError),
}

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Resolution selection errors
    Resolution(ResolutionError),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::NoProfileAvailable { camera_id, preset } => write!(
                f,
                "No profile available for camera {} at or below preset {}",
                camera_id, preset
            ),
            ResolutionError::Provider(e) => write!(f, "Profile provider error: {}", e),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Resolution(e) => write!(f, "Camera configuration failed: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ResolutionError {}
impl std::error::Error for AppError {}

impl From<ProviderError> for ResolutionError {
    fn from(err: ProviderError) -> Self {
        ResolutionError::Provider(err)
    }
}

impl From<ResolutionError> for AppError {
    fn from(err: ResolutionError) -> Self {
        AppError::Resolution(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
