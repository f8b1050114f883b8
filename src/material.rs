//! Surface colour rules.
//!
//! Spheres are either a flat diffuse colour or, for the oversized ground
//! sphere, a procedural checkerboard evaluated at the world-space hit point.

use crate::vector::{Color, Point3};

/// Dark squares of the ground checkerboard.
pub const CHECKER_DARK: Color = Color::new(0.1, 0.1, 0.1);

/// Light squares of the ground checkerboard.
pub const CHECKER_LIGHT: Color = Color::new(0.9, 0.9, 0.9);

/// Material types for shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialType {
    /// Lambertian diffuse material with a constant colour.
    Diffuse {
        /// Surface colour/reflectance.
        albedo: Color,
    },

    /// Unit checkerboard on the xz-plane.
    Checkerboard {
        /// Colour where `floor(x) + floor(z)` is even.
        even: Color,
        /// Colour where `floor(x) + floor(z)` is odd.
        odd: Color,
    },
}

impl MaterialType {
    /// The ground checkerboard: dark on even cells, light on odd.
    pub const GROUND: MaterialType = MaterialType::Checkerboard {
        even: CHECKER_DARK,
        odd: CHECKER_LIGHT,
    };

    /// Surface colour at world-space point `p`.
    pub fn albedo_at(&self, p: Point3) -> Color {
        match *self {
            MaterialType::Diffuse { albedo } => albedo,
            MaterialType::Checkerboard { even, odd } => {
                if checker_parity(p) == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

/// Parity of the unit cell containing `p`, projected onto the xz-plane.
fn checker_parity(p: Point3) -> i64 {
    (p.x.floor() as i64 + p.z.floor() as i64).rem_euclid(2)
}
