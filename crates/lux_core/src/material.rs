//! Surface materials for the local shading model.

use lux_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values, inputs typically 0-1).
///
/// Shaded output is never clamped and may exceed 1.
pub type Color = Vec3;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;

/// Procedural texture applied to a material's base color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureKind {
    /// Plain base color
    #[default]
    Solid,
    /// Unit cubes in world space alternating white and base color
    Checkerboard,
    /// Concentric rings centered on the world origin
    ZonePlate,
}

impl TextureKind {
    /// Map a legacy integer texture tag to a kind.
    ///
    /// `1` is checkerboard, `2` is zone plate, anything else is solid.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            1 => TextureKind::Checkerboard,
            2 => TextureKind::ZonePlate,
            _ => TextureKind::Solid,
        }
    }
}

/// A Phong-style material with reflection and transmission coefficients.
///
/// Materials are plain values: geometry copies the current material when it
/// is defined, so later changes never affect existing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base color (RGB, 0-1)
    pub color: Color,

    /// Ambient coefficient (Ka)
    pub ka: f32,

    /// Diffuse coefficient (Kd)
    pub kd: f32,

    /// Specular coefficient (Ks)
    pub ks: f32,

    /// Specular exponent (n)
    pub shininess: f32,

    /// Reflectivity (Kr)
    pub kr: f32,

    /// Transmissivity (Kt)
    pub kt: f32,

    /// Index of refraction
    pub index: f32,

    /// Procedural texture
    pub texture: TextureKind,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: WHITE,
            ka: 0.2,
            kd: 0.6,
            ks: 0.7,
            shininess: 50.0,
            kr: 0.0,
            kt: 0.0,
            index: 1.0,
            texture: TextureKind::Solid,
        }
    }
}

impl Material {
    /// Create a default material with the given base color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the procedural texture.
    pub fn with_texture(mut self, texture: TextureKind) -> Self {
        self.texture = texture;
        self
    }

    /// Set the ambient, diffuse, specular coefficients and specular exponent.
    pub fn with_phong(mut self, ka: f32, kd: f32, ks: f32, shininess: f32) -> Self {
        self.ka = ka;
        self.kd = kd;
        self.ks = ks;
        self.shininess = shininess;
        self
    }

    /// True if a recursive tracer should spawn a reflected ray.
    pub fn is_reflective(&self) -> bool {
        self.kr > 0.0
    }

    /// True if a recursive tracer should spawn a transmitted ray.
    pub fn is_transmissive(&self) -> bool {
        self.kt > 0.0
    }
}
