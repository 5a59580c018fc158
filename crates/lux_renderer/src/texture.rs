//! Procedural textures evaluated in world space.

use lux_core::{Color, Material, TextureKind, WHITE};
use lux_math::Vec3;

/// Offset added to each coordinate before flooring so points that sit on a
/// cell boundary do not flip parity from rounding noise.
///
/// Only effective while coordinates stay well below about 2048, where half
/// an `f32` ulp grows past the bias.
pub const CHECKER_BIAS: f32 = 1e-4;

/// Color of `material` at world-space `position`.
pub fn evaluate(material: &Material, position: Vec3) -> Color {
    match material.texture {
        TextureKind::Solid => material.color,
        TextureKind::Checkerboard => checkerboard(material.color, position),
        TextureKind::ZonePlate => zone_plate(material.color, position),
    }
}

/// White on cells whose floored coordinate sum is odd, base color otherwise.
fn checkerboard(base: Color, position: Vec3) -> Color {
    let cell = (position + Vec3::splat(CHECKER_BIAS)).floor();
    let sum = (cell.x + cell.y + cell.z) as i64;
    if sum % 2 != 0 {
        WHITE
    } else {
        base
    }
}

/// Base color modulated by `0.5 cos(|p|^2) + 0.5`.
fn zone_plate(base: Color, position: Vec3) -> Color {
    let contribution = 0.5 * position.dot(position).cos() + 0.5;
    base * contribution
}
