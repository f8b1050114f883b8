//! Sphere primitive for ray tracing.
//!
//! Only the near root of the intersection quadratic is used: spheres are
//! opaque solids and the exit point is never needed.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;
use crate::vector::{unit_vector, Color, Point3};

/// Spheres larger than this stand in for an infinite ground plane and are
/// shaded with the checkerboard instead of their base colour.
pub const GROUND_RADIUS_THRESHOLD: f64 = 100.0;

/// Sphere primitive defined by center, radius, and base colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere, always positive.
    pub radius: f64,

    /// Base colour as given by the scene.
    pub color: Color,

    /// Material derived from the colour and the ground convention.
    pub material: MaterialType,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Panics if `radius` is not a positive finite number.
    pub fn new(center: Point3, radius: f64, color: Color) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "sphere radius must be positive and finite, got {radius}"
        );
        let material = if radius > GROUND_RADIUS_THRESHOLD {
            MaterialType::GROUND
        } else {
            MaterialType::Diffuse { albedo: color }
        };
        Self { center, radius, color, material }
    }

    /// True for the oversized sphere used as the checkerboard ground.
    pub fn is_ground(&self) -> bool {
        self.radius > GROUND_RADIUS_THRESHOLD
    }

    /// Distance along `r` to the near intersection, if it lies in front of
    /// the ray origin.
    ///
    /// Solves `a·t² + b·t + c = 0` and keeps the smaller root. A degenerate
    /// direction (`a` ≈ 0) never intersects.
    pub fn intersect(&self, r: &Ray) -> Option<f64> {
        let oc = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        if a <= f64::EPSILON {
            return None;
        }
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        (t > 0.0).then_some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = self.intersect(r).filter(|&t| ray_t.surrounds(t))?;
        let p = r.at(t);
        let outward_normal = unit_vector(p - self.center);
        Some(HitRecord::new(r, p, t, outward_normal, self.material.albedo_at(p)))
    }
}
