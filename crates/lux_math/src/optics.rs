//! Vector primitives shared by the shading code.
//!
//! Lifted out of the material helpers so shading and any recursive tracer
//! built on top of it agree on the same reflection and refraction rules.

use crate::Vec3;

/// Scale `v` to unit length in place and return its previous length.
///
/// A zero vector is divided by zero and comes back non-finite. Callers that
/// can produce degenerate vectors must check the returned length.
#[inline]
pub fn normalize(v: &mut Vec3) -> f32 {
    let length = v.length();
    *v /= length;
    length
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit direction through a surface with unit normal `n`.
///
/// `n` must face the side the ray arrives from. `eta_from` and `eta_to` are
/// the refractive indices on the incoming and outgoing sides. Returns `None`
/// on total internal reflection.
pub fn transmit(uv: Vec3, n: Vec3, eta_from: f32, eta_to: f32) -> Option<Vec3> {
    let ratio = eta_from / eta_to;
    let cos_theta = (-uv).dot(n).min(1.0);
    let sin2_theta = ratio * ratio * (1.0 - cos_theta * cos_theta);
    if sin2_theta > 1.0 {
        return None;
    }

    let r_out_perp = ratio * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_normalize_returns_prior_length() {
        let mut v = Vec3::new(0.0, 10.0, 0.0);
        let length = normalize(&mut v);

        assert_eq!(length, 10.0);
        assert_eq!(v, Vec3::Y);
    }

    #[test]
    fn test_normalize_zero_vector_is_not_finite() {
        let mut v = Vec3::ZERO;
        let length = normalize(&mut v);

        assert_eq!(length, 0.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let reflected = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(reflected, Vec3::new(1.0, 1.0, 0.0));

        // Reflecting the normal itself points it straight back
        assert_eq!(reflect(Vec3::Y, Vec3::Y), -Vec3::Y);
    }

    #[test]
    fn test_transmit_head_on_passes_straight_through() {
        let out = transmit(-Vec3::Y, Vec3::Y, 1.0, 1.5).unwrap();
        assert!(approx_eq(out, -Vec3::Y));
    }

    #[test]
    fn test_transmit_bends_toward_normal_entering_denser_medium() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = transmit(incident, Vec3::Y, 1.0, 1.5).unwrap();

        // Snell: sin(out) = sin(in) / 1.5
        let sin_in = incident.x;
        assert!((out.x - sin_in / 1.5).abs() < 1e-5);
        assert!(out.y < 0.0);
        assert!((out.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_transmit_total_internal_reflection() {
        // Grazing ray leaving glass into air
        let incident = Vec3::new(0.9, -0.1, 0.0).normalize();
        assert!(transmit(incident, Vec3::Y, 1.5, 1.0).is_none());
    }
}
