//! Vector algebra shared by geometry, shading and colour.
//!
//! Points, directions and RGB colours are all `glam::DVec3`. Colour channels
//! are plain components and may exceed 1.0 until the output stage clamps them.

use glam::DVec3;

/// Three-component double precision vector.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;

/// Linear RGB colour, one channel per component.
pub type Color = DVec3;

/// Normalize `v` to unit length.
///
/// Panics on a zero-length (or non-finite) input: every caller derives its
/// direction from two distinct points or from a non-zero reflection.
pub fn unit_vector(v: Vec3) -> Vec3 {
    let length = v.length();
    assert!(
        length > 0.0 && length.is_finite(),
        "cannot normalize degenerate vector {v}"
    );
    v / length
}

/// Mirror `v` about the unit normal `n`: `v - 2(v·n)n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn unit_vector_has_length_one() {
        let v = unit_vector(Vec3::new(3.0, -4.0, 12.0));
        assert!((v.length() - 1.0).abs() < EPS);
        assert!((v.x - 3.0 / 13.0).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "degenerate")]
    fn unit_vector_rejects_zero() {
        unit_vector(Vec3::ZERO);
    }

    #[test]
    fn reflection_flips_normal_component() {
        let normals = [
            Vec3::Y,
            unit_vector(Vec3::new(1.0, 1.0, 0.0)),
            unit_vector(Vec3::new(-0.3, 0.2, 0.9)),
        ];
        let vectors = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.5, 2.0, -3.0),
            Vec3::new(-7.0, 0.1, 0.25),
        ];
        for n in normals {
            for v in vectors {
                let r = reflect(v, n);
                assert!((r.dot(n) + v.dot(n)).abs() < 1e-9);
                // Tangential part and length are preserved.
                assert!((r.length() - v.length()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn colors_multiply_per_channel() {
        let c = Color::new(0.5, 1.0, 2.0) * Color::new(0.8, 0.5, 0.25);
        assert_eq!(c, Color::new(0.4, 0.5, 0.5));
    }
}
