//! Random number generation for ray tracing.
//!
//! Generators are passed explicitly through the tracer. Each image row gets
//! its own ChaCha20 stream derived from a single render seed, so output does
//! not depend on how rows are scheduled across threads.

use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vector::Vec3;

/// PRNG used by the renderer.
pub type TraceRng = ChaCha20Rng;

/// Draw a fresh render seed from the thread-local OS-seeded generator.
pub fn entropy_seed() -> u64 {
    rng().random()
}

/// Generator for one image row: stream `row` of the ChaCha20 keyed by `seed`.
pub fn row_rng(seed: u64, row: u32) -> TraceRng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(row));
    rng
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Random point strictly inside the unit sphere, by rejection sampling.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
