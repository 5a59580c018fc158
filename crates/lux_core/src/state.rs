//! Current material and background color used during scene construction.

use crate::error::{SceneError, SceneResult};
use crate::material::{Color, Material, BLACK};

/// Scene-wide settings that construction calls change and shading reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    material: Material,
    background: Color,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            material: Material::default(),
            background: BLACK,
        }
    }
}

impl SceneState {
    /// Create state with the session defaults: default material, black background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current material. No validation is performed.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Material that newly defined geometry should copy.
    pub fn current_material(&self) -> Material {
        self.material
    }

    /// Replace the background if every channel lies in [0, 1].
    ///
    /// On error the previous background is kept.
    pub fn set_background(&mut self, color: Color) -> SceneResult<()> {
        let in_range = |c: f32| (0.0..=1.0).contains(&c);
        if !(in_range(color.x) && in_range(color.y) && in_range(color.z)) {
            return Err(SceneError::BackgroundOutOfRange { color });
        }
        self.background = color;
        Ok(())
    }

    /// Color returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }
}
