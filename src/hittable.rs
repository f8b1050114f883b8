//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::{Color, Point3, Vec3};

/// Offset applied along the normal to rays leaving a surface, so they do not
/// re-intersect the surface they start on.
pub const SURFACE_BIAS: f64 = 0.001;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Unit surface normal, always facing against the incident ray
    pub normal: Vec3,
    /// Distance along the ray to the intersection point
    pub t: f64,
    /// False when the ray started inside the object
    pub front_face: bool,
    /// Surface colour at `p`
    pub albedo: Color,
}

impl HitRecord {
    /// Build a record, orienting `outward_normal` against the ray.
    pub fn new(r: &Ray, p: Point3, t: f64, outward_normal: Vec3, albedo: Color) -> Self {
        let front_face = r.direction.dot(outward_normal) <= 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { p, normal, t, front_face, albedo }
    }

    /// Origin for secondary rays: the hit point nudged off the surface.
    pub fn offset_origin(&self) -> Point3 {
        self.p + self.normal * SURFACE_BIAS
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so a scene can be shared by all row
/// workers during parallel rendering.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with `r` whose distance lies strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
