//! Local illumination: ambient, diffuse and specular terms over point lights.

use lux_core::{Color, Material, Scene, BLACK, WHITE};
use lux_math::{normalize, reflect, Ray, Vec3};
use rayon::prelude::*;

use crate::config::ShadingConfig;
use crate::texture;

/// Nearest surface along a ray, as reported by a [`SceneQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the hit, in units of the ray direction
    pub distance: f32,
    /// Surface normal; need not be unit length
    pub normal: Vec3,
    /// Material of the surface
    pub material: Material,
}

/// Geometry queries the shader needs from the scene.
pub trait SceneQuery: Send + Sync {
    /// Nearest hit along `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit>;

    /// True if something blocks `ray` before `max_distance`.
    ///
    /// `ray.direction` is unit length, so `max_distance` is a world distance.
    fn occluded(&self, ray: &Ray, max_distance: f32) -> bool;
}

/// Shades rays against a frozen scene.
///
/// Holds only shared borrows, so one shader can be used from many threads
/// at once.
#[derive(Clone, Copy)]
pub struct Shader<'a> {
    scene: &'a Scene,
    world: &'a dyn SceneQuery,
    config: ShadingConfig,
}

impl<'a> Shader<'a> {
    /// Create a shader with the default configuration.
    pub fn new(scene: &'a Scene, world: &'a dyn SceneQuery) -> Self {
        Self::with_config(scene, world, ShadingConfig::default())
    }

    /// Create a shader with an explicit configuration.
    pub fn with_config(scene: &'a Scene, world: &'a dyn SceneQuery, config: ShadingConfig) -> Self {
        Self {
            scene,
            world,
            config,
        }
    }

    /// Color seen along `ray`: the shaded nearest surface, or the background.
    pub fn radiance(&self, ray: &Ray) -> Color {
        match self.world.intersect(ray) {
            Some(hit) => self.shade(ray, hit.distance, hit.normal, &hit.material),
            None => self.scene.background(),
        }
    }

    /// Radiance for every ray in `rays`, evaluated in parallel.
    ///
    /// Output order matches input order.
    pub fn radiance_batch(&self, rays: &[Ray]) -> Vec<Color> {
        log::debug!(
            "Shading {} rays against {} lights",
            rays.len(),
            self.scene.light_count()
        );
        rays.par_iter().map(|ray| self.radiance(ray)).collect()
    }

    /// Shade the point at parameter `t` along `ray`.
    ///
    /// Lights are visited in the scene's order and their attenuated
    /// intensities are summed into one running total. Each visible light's
    /// diffuse and specular terms are scaled by that running total, not by
    /// its own contribution, so reordering lights changes the result. The
    /// ambient term uses the final total, occluded lights included. Nothing
    /// is clamped.
    pub fn shade(&self, ray: &Ray, t: f32, mut normal: Vec3, material: &Material) -> Color {
        normalize(&mut normal);

        let intersection = ray.at(t);
        let texture_color = texture::evaluate(material, intersection);

        let mut diffuse = BLACK;
        let mut specular = BLACK;
        let mut intensity = 0.0;

        for light in self.scene.lights() {
            let mut light_dir = light.position - intersection;
            let light_distance = normalize(&mut light_dir);

            intensity += self
                .config
                .attenuation
                .falloff(light.intensity, light_distance, light.radius);

            if self.config.shadows {
                let shadow_ray = Ray::new(intersection, light_dir);
                if self.world.occluded(&shadow_ray, light_distance) {
                    continue;
                }
            }

            let mut light_diffuse = texture_color * material.kd;
            let n_dot_l = normal.dot(light_dir);
            if n_dot_l > 0.0 {
                light_diffuse *= n_dot_l * intensity;
            }
            diffuse += light_diffuse;

            let reflected = reflect(light_dir, normal);
            let spec_dot = reflected.dot(ray.direction());
            let spec_pow = if spec_dot < 0.0 {
                0.0
            } else {
                spec_dot.powf(material.shininess)
            };
            specular += WHITE * (spec_pow * intensity * material.ks);
        }

        let ambient = texture_color * (material.ka * intensity);

        ambient + diffuse + specular
    }
}
