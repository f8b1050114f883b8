//! Point lights and direct illumination.
//!
//! Lights are shaded with a clamped Lambertian term and a stochastic soft
//! shadow: several shadow rays toward jittered copies of the light position,
//! counting the fraction that arrive unblocked.

use rand::Rng;

use crate::hittable::HitRecord;
use crate::random::random_in_unit_sphere;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{unit_vector, Color, Point3, Vec3};

/// Shadow rays cast per light per shading point.
pub const SHADOW_SAMPLES: u32 = 16;

/// Radius of the sphere the light position is jittered within.
pub const LIGHT_JITTER_RADIUS: f64 = 0.1;

/// Point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Point3,
    /// Intensity per channel; components above 1.0 are brighter lights.
    pub color: Color,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }

    /// Unit direction from `p` toward the light.
    pub fn direction_from(&self, p: Point3) -> Vec3 {
        unit_vector(self.position - p)
    }

    /// Fraction in [0, 1] of jittered shadow rays from the hit that reach the light.
    pub fn shadow_intensity<R: Rng + ?Sized>(&self, scene: &Scene, rec: &HitRecord, rng: &mut R) -> f64 {
        let origin = rec.offset_origin();
        let unblocked = (0..SHADOW_SAMPLES)
            .filter(|_| {
                let target = self.position + random_in_unit_sphere(&mut *rng) * LIGHT_JITTER_RADIUS;
                let to_light = target - origin;
                let shadow_ray = Ray::new(origin, unit_vector(to_light));
                !scene.is_occluded(&shadow_ray, to_light.length())
            })
            .count();
        unblocked as f64 / f64::from(SHADOW_SAMPLES)
    }

    /// Light reflected toward the viewer at `rec` from this light alone.
    pub fn illuminate<R: Rng + ?Sized>(&self, scene: &Scene, rec: &HitRecord, rng: &mut R) -> Color {
        let shadow = self.shadow_intensity(scene, rec, rng);
        let diffuse = lambert(rec.normal, self.direction_from(rec.p));
        rec.albedo * self.color * (diffuse * shadow)
    }
}

/// Lambertian cosine term, clamped at zero for surfaces facing away.
pub fn lambert(normal: Vec3, light_dir: Vec3) -> f64 {
    normal.dot(light_dir).max(0.0)
}
