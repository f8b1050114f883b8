//! Scene container: spheres and lights, read-only while rendering.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::{Color, Point3};

/// Minimum distance for a shadow-ray hit to count as an occluder.
pub const SHADOW_EPSILON: f64 = 0.001;

/// Spheres and point lights making up a frame.
///
/// Intersection is a linear scan over every sphere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Geometry, in declaration order
    pub spheres: Vec<Sphere>,
    /// Point lights, in declaration order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from its spheres and lights.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Three coloured spheres on a checkerboard ground, lit by three lights.
    pub fn demo() -> Self {
        let spheres = vec![
            Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, Color::new(0.8, 0.3, 0.3)),
            Sphere::new(Point3::new(-2.0, 1.0, -6.0), 1.0, Color::new(0.3, 0.8, 0.3)),
            Sphere::new(Point3::new(2.0, 0.0, -4.0), 1.0, Color::new(0.3, 0.3, 0.8)),
            Sphere::new(Point3::new(0.0, -1001.0, 0.0), 1000.0, Color::new(0.9, 0.9, 0.9)),
        ];
        let lights = vec![
            Light::new(Point3::new(-5.0, 5.0, -5.0), Color::splat(0.8)),
            Light::new(Point3::new(5.0, 3.0, -5.0), Color::splat(0.6)),
            Light::new(Point3::new(0.0, 5.0, -3.0), Color::splat(0.5)),
        ];
        Self::new(spheres, lights)
    }

    /// True if any sphere blocks `r` between `SHADOW_EPSILON` and `max_t`.
    pub fn is_occluded(&self, r: &Ray, max_t: f64) -> bool {
        let range = Interval::new(SHADOW_EPSILON, max_t);
        self.spheres
            .iter()
            .filter_map(|sphere| sphere.intersect(r))
            .any(|t| range.surrounds(t))
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        for sphere in &self.spheres {
            let range = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = sphere.hit(r, range) {
                closest = Some(rec);
            }
        }
        closest
    }
}
