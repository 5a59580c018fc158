//! Errors reported by scene-construction calls.

use thiserror::Error;

use crate::material::Color;

/// Errors that can occur while building a scene.
///
/// Every variant is returned by the offending registration call, and the
/// state it would have changed is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("light domain error: intensity {intensity} must be > 0 and radius {radius} must be >= 0")]
    InvalidLight { intensity: f32, radius: f32 },

    #[error("background domain error: channels ({}, {}, {}) must lie in [0, 1]", color.x, color.y, color.z)]
    BackgroundOutOfRange { color: Color },
}

/// Result type for scene-construction calls.
pub type SceneResult<T> = Result<T, SceneError>;
