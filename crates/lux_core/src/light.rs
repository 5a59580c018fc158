//! Point lights and the registry that owns them.

use lux_math::Vec3;

use crate::error::{SceneError, SceneResult};

/// An isotropic point light.
///
/// `radius` only softens distance falloff; it does not give the light a
/// geometric size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub radius: f32,
}

impl PointLight {
    /// Create a light, rejecting non-positive intensity or negative radius.
    ///
    /// NaN in either parameter is rejected too.
    pub fn new(position: Vec3, intensity: f32, radius: f32) -> SceneResult<Self> {
        let intensity_ok = intensity > 0.0;
        let radius_ok = radius >= 0.0;
        if !intensity_ok || !radius_ok {
            return Err(SceneError::InvalidLight { intensity, radius });
        }
        Ok(Self {
            position,
            intensity,
            radius,
        })
    }
}

/// Stable handle to a light inside a [`LightRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

impl LightId {
    /// Arena slot this handle refers to.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Arena-backed collection of point lights.
///
/// Lights are stored contiguously in registration order. Iteration visits
/// the most recently added light first; shading accumulates intensity in
/// that order, so the order is part of the output contract.
#[derive(Debug, Clone, Default)]
pub struct LightRegistry {
    lights: Vec<PointLight>,
}

impl LightRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Validate and register a light.
    ///
    /// On error the registry is unchanged.
    pub fn add(&mut self, position: Vec3, intensity: f32, radius: f32) -> SceneResult<LightId> {
        let light = PointLight::new(position, intensity, radius)?;
        let id = LightId(self.lights.len());
        self.lights.push(light);
        Ok(id)
    }

    /// Release every light. Calling it on an empty registry is a no-op.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Look up a light by handle.
    pub fn get(&self, id: LightId) -> Option<&PointLight> {
        self.lights.get(id.0)
    }

    /// Iterate lights, most recently added first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PointLight> + ExactSizeIterator + Clone {
        self.lights.iter().rev()
    }

    /// Get the number of lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

impl<'a> IntoIterator for &'a LightRegistry {
    type Item = &'a PointLight;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, PointLight>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lights.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_add_valid_light() {
        let mut registry = LightRegistry::new();
        let id = registry.add(Vec3::new(0.0, 10.0, 0.0), 100.0, 0.0).unwrap();

        assert_eq!(registry.len(), 1);
        let light = registry.get(id).unwrap();
        assert_eq!(light.position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(light.intensity, 100.0);
        assert_eq!(light.radius, 0.0);
    }

    #[test]
    fn test_reject_invalid_light_leaves_registry_unchanged() {
        let mut registry = LightRegistry::new();
        registry.add(Vec3::ZERO, 1.0, 0.0).unwrap();

        for (intensity, radius) in [
            (0.0, 0.0),
            (-1.0, 0.0),
            (1.0, -0.001),
            (f32::NAN, 0.0),
            (1.0, f32::NAN),
        ] {
            let err = registry.add(Vec3::ONE, intensity, radius).unwrap_err();
            assert!(matches!(err, SceneError::InvalidLight { .. }));
            assert_eq!(registry.len(), 1);
        }
    }

    #[test]
    fn test_random_valid_lights_are_always_accepted() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut registry = LightRegistry::new();

        for n in 1..=200 {
            let position = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            let intensity = rng.gen_range(f32::EPSILON..1000.0);
            let radius = rng.gen_range(0.0..10.0);
            registry.add(position, intensity, radius).unwrap();
            assert_eq!(registry.len(), n);
        }
    }

    #[test]
    fn test_iteration_is_most_recent_first() {
        let mut registry = LightRegistry::new();
        registry.add(Vec3::X, 1.0, 0.0).unwrap();
        registry.add(Vec3::Y, 2.0, 0.0).unwrap();
        registry.add(Vec3::Z, 3.0, 0.0).unwrap();

        let intensities: Vec<f32> = registry.iter().map(|l| l.intensity).collect();
        assert_eq!(intensities, vec![3.0, 2.0, 1.0]);

        // Restartable and identical on a second pass
        let again: Vec<f32> = (&registry).into_iter().map(|l| l.intensity).collect();
        assert_eq!(intensities, again);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut registry = LightRegistry::new();
        let id = registry.add(Vec3::ZERO, 1.0, 0.0).unwrap();
        registry.add(Vec3::ONE, 1.0, 0.0).unwrap();

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
        assert!(registry.get(id).is_none());

        registry.clear();
        assert!(registry.is_empty());
    }
}
