//! Shading configuration.

use serde::{Deserialize, Serialize};

/// How light intensity falls off with distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Attenuation {
    /// `intensity / (distance - radius)^2` exactly as written.
    ///
    /// Singular when the hit point lies on the light's radius, and rises
    /// again inside it.
    #[default]
    Literal,
    /// Same formula with `distance - radius` floored at `min_distance`.
    Clamped { min_distance: f32 },
}

impl Attenuation {
    /// Intensity contributed by a light of `intensity` and `radius` at `distance`.
    #[inline]
    pub fn falloff(&self, intensity: f32, distance: f32, radius: f32) -> f32 {
        let effective = match *self {
            Attenuation::Literal => distance - radius,
            Attenuation::Clamped { min_distance } => (distance - radius).max(min_distance),
        };
        intensity / (effective * effective)
    }
}

/// Shading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Distance falloff model
    pub attenuation: Attenuation,
    /// Whether to consult the shadow query at all
    pub shadows: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            attenuation: Attenuation::Literal,
            shadows: true,
        }
    }
}
