//! Lux Core - scene construction state for the Lux shader.
//!
//! This crate provides:
//!
//! - **Materials**: `Material` values and their procedural `TextureKind`
//! - **Lights**: point lights held in an arena-backed `LightRegistry`
//! - **Scene state**: the current material and background color
//! - **Session lifecycle**: `SceneBuilder` for construction, frozen `Scene` for rendering
//!
//! # Example
//!
//! ```
//! use lux_core::{Color, SceneBuilder};
//! use lux_math::Vec3;
//!
//! let mut builder = SceneBuilder::new();
//! builder.add_light(Vec3::new(0.0, 10.0, 0.0), 100.0, 0.0)?;
//! builder.set_background(Color::new(0.1, 0.1, 0.2))?;
//!
//! let scene = builder.freeze();
//! assert_eq!(scene.light_count(), 1);
//! # Ok::<(), lux_core::SceneError>(())
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod scene;
pub mod state;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::{LightId, LightRegistry, PointLight};
pub use material::{Color, Material, TextureKind, BLACK, WHITE};
pub use scene::{Scene, SceneBuilder};
pub use state::SceneState;
