//! Hittable trait and HitRecord for ray-object intersection.

use lux_core::Material;
use lux_math::{Interval, Ray, Vec3};

use crate::shading::{SceneQuery, SurfaceHit};

/// Smallest ray parameter accepted as a hit, so secondary rays leaving a
/// surface do not immediately re-hit it.
pub const RAY_EPSILON: f32 = 0.001;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Copy of the material of the surface that was hit
    pub material: Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns true if hit, and fills in the hit record.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// A list of hittable objects.
///
/// Answers scene queries by brute force over every object.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

impl SceneQuery for HittableList {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let mut rec = HitRecord::default();
        if !self.hit(ray, Interval::new(RAY_EPSILON, f32::INFINITY), &mut rec) {
            return None;
        }
        Some(SurfaceHit {
            distance: rec.t,
            normal: rec.normal,
            material: rec.material,
        })
    }

    fn occluded(&self, ray: &Ray, max_distance: f32) -> bool {
        let window = Interval::new(RAY_EPSILON, max_distance);
        let mut rec = HitRecord::default();
        self.objects
            .iter()
            .any(|object| object.hit(ray, window, &mut rec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use lux_core::Color;

    fn two_spheres() -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::new(Color::new(0.0, 0.0, 1.0)),
        )));
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            Material::new(Color::new(1.0, 0.0, 0.0)),
        )));
        world
    }

    #[test]
    fn test_set_face_normal() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut rec = HitRecord::default();

        rec.set_face_normal(&ray, Vec3::Z);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        rec.set_face_normal(&ray, -Vec3::Z);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_intersect_returns_nearest() {
        let world = two_spheres();
        assert_eq!(world.len(), 2);

        let hit = world.intersect(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(hit.material.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersect_miss() {
        let world = two_spheres();
        assert!(world.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
        assert!(HittableList::new().intersect(&Ray::default()).is_none());
    }

    #[test]
    fn test_occluded_respects_max_distance() {
        let world = two_spheres();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(world.occluded(&ray, 10.0));
        assert!(world.occluded(&ray, 1.6));
        assert!(!world.occluded(&ray, 1.4));
    }

    #[test]
    fn test_occluded_ignores_surface_the_ray_leaves() {
        let world = two_spheres();

        // Starting on the front of the near sphere heading away from it
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.5), Vec3::Z);
        assert!(!world.occluded(&ray, 100.0));
    }

    #[test]
    fn test_clear() {
        let mut world = two_spheres();
        world.clear();
        assert!(world.is_empty());
        assert!(!world.occluded(&Ray::new(Vec3::ZERO, -Vec3::Z), 10.0));
    }
}
