//! Lux Renderer - local illumination for a Whitted-style ray tracer.
//!
//! Given a ray, the shader asks a [`SceneQuery`] for the nearest surface,
//! evaluates the material's procedural texture and sums ambient, diffuse
//! and specular terms over every point light in a frozen [`Scene`].
//! Recursive reflection and refraction are left to the caller.
//!
//! [`Scene`]: lux_core::Scene

mod config;
mod hittable;
mod plane;
mod shading;
mod sphere;
mod texture;

pub use config::{Attenuation, ShadingConfig};
pub use hittable::{HitRecord, Hittable, HittableList, RAY_EPSILON};
pub use plane::Plane;
pub use shading::{SceneQuery, Shader, SurfaceHit};
pub use sphere::Sphere;
pub use texture::{evaluate, CHECKER_BIAS};

/// Re-export common types from the lower crates
pub use lux_core::{Color, Material, Scene, SceneBuilder, TextureKind};
pub use lux_math::{Interval, Ray, Vec3};
