//! Scene construction and the frozen scene handed to the shader.
//!
//! A rendering session has two phases. During construction a
//! [`SceneBuilder`] collects lights and tracks the current material and
//! background. [`SceneBuilder::freeze`] then produces an immutable
//! [`Scene`] that any number of threads may shade against.

use std::sync::Arc;

use lux_math::Vec3;

use crate::error::SceneResult;
use crate::light::{LightId, LightRegistry, PointLight};
use crate::material::{Color, Material};
use crate::state::SceneState;

/// Mutable construction phase of a rendering session.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    lights: LightRegistry,
    state: SceneState,
}

impl SceneBuilder {
    /// Start a session with default material, black background and no lights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to a fresh session: defaults restored, every light released.
    pub fn init_session(&mut self) {
        self.lights.clear();
        self.state = SceneState::default();
        log::debug!("Scene session initialised");
    }

    /// Release every light. Material and background are kept.
    pub fn end_session(&mut self) {
        let released = self.lights.len();
        self.lights.clear();
        log::debug!("Scene session ended, released {} lights", released);
    }

    /// Register a point light at `position`.
    pub fn add_light(&mut self, position: Vec3, intensity: f32, radius: f32) -> SceneResult<LightId> {
        match self.lights.add(position, intensity, radius) {
            Ok(id) => {
                log::debug!(
                    "Added light {} at {:?} (intensity {}, radius {})",
                    id.index(),
                    position,
                    intensity,
                    radius
                );
                Ok(id)
            }
            Err(err) => {
                log::warn!("Rejected light at {:?}: {}", position, err);
                Err(err)
            }
        }
    }

    /// Replace the current material.
    pub fn set_material(&mut self, material: Material) {
        log::debug!("Current material set to {:?}", material);
        self.state.set_material(material);
    }

    /// Material that geometry defined now should copy.
    pub fn current_material(&self) -> Material {
        self.state.current_material()
    }

    /// Replace the background color if it is in range.
    pub fn set_background(&mut self, color: Color) -> SceneResult<()> {
        self.state.set_background(color).inspect_err(|err| {
            log::warn!("Rejected background: {}", err);
        })
    }

    /// Current background color.
    pub fn background(&self) -> Color {
        self.state.background()
    }

    /// Lights registered so far.
    pub fn lights(&self) -> &LightRegistry {
        &self.lights
    }

    /// Snapshot the current lights and settings for rendering.
    ///
    /// The builder stays usable; later changes do not affect the snapshot.
    pub fn freeze(&self) -> Scene {
        let lights: Arc<[PointLight]> = self.lights.iter().copied().collect();
        log::info!(
            "Froze scene with {} lights, background {:?}",
            lights.len(),
            self.state.background()
        );
        Scene {
            lights,
            state: self.state,
        }
    }
}

/// Immutable render-phase view of a session.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Stored in shading order (most recently added first)
    lights: Arc<[PointLight]>,
    state: SceneState,
}

impl Scene {
    /// Lights in shading order, most recently added first.
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Color for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.state.background()
    }

    /// Material that was current when the scene was frozen.
    pub fn material(&self) -> Material {
        self.state.current_material()
    }
}

impl Default for Scene {
    fn default() -> Self {
        SceneBuilder::new().freeze()
    }
}
