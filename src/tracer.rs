//! Recursive Whitted-style tracer.
//!
//! Each hit gathers direct light from every scene light (diffuse term times
//! soft-shadow visibility), then follows one mirror reflection scaled by a
//! fixed reflectivity until the bounce limit is reached.

use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{reflect, unit_vector, Color};

/// Colour returned for rays that escape the scene.
pub const SKY_COLOR: Color = Color::new(0.2, 0.7, 0.8);

/// Weight of the reflected ray in every surface's final colour.
pub const REFLECTIVITY: f64 = 0.5;

/// Colour seen along `r`.
///
/// Returns black once `depth >= max_depth`, so `max_depth = 0` traces nothing
/// and `max_depth = 1` shades primary hits without following reflections.
/// Channels are left unclamped.
pub fn trace<R: Rng + ?Sized>(r: &Ray, scene: &Scene, depth: u32, max_depth: u32, rng: &mut R) -> Color {
    if depth >= max_depth {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(r, Interval::FORWARD) else {
        return SKY_COLOR;
    };

    let direct: Color = scene
        .lights
        .iter()
        .map(|light| light.illuminate(scene, &rec, &mut *rng))
        .sum();

    let reflected = Ray::new(rec.offset_origin(), unit_vector(reflect(r.direction, rec.normal)));
    let bounce = trace(&reflected, scene, depth + 1, max_depth, rng);

    direct + bounce * REFLECTIVITY
}
