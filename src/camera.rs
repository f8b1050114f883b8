//! Pinhole camera for primary ray generation.
//!
//! The camera sits at the world origin looking down −z with +y up. Pixel
//! row 0 is the top of the image.

use crate::ray::Ray;
use crate::vector::{unit_vector, Point3, Vec3};

/// Default vertical field of view in degrees.
pub const DEFAULT_VFOV: f64 = 60.0;

/// Fixed-orientation pinhole camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Camera position in world space
    pub center: Point3,

    /// tan(vfov / 2)
    half_height: f64,
    /// Width over height
    aspect_ratio: f64,
}

impl Camera {
    /// Camera for a `width` x `height` image with the default 60° field of view.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_vfov(width, height, DEFAULT_VFOV)
    }

    /// Camera with an explicit vertical field of view in degrees.
    pub fn with_vfov(width: u32, height: u32, vfov: f64) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be non-zero, got {width}x{height}");
        assert!(vfov > 0.0 && vfov < 180.0, "vertical field of view must be in (0, 180), got {vfov}");
        Self {
            image_width: width,
            image_height: height,
            vfov,
            center: Point3::ZERO,
            half_height: (vfov.to_radians() / 2.0).tan(),
            aspect_ratio: f64::from(width) / f64::from(height),
        }
    }

    /// Unit direction through the center of pixel (`i`, `j`).
    pub fn ray_direction(&self, i: u32, j: u32) -> Vec3 {
        let ndc_x = 2.0 * ((f64::from(i) + 0.5) / f64::from(self.image_width)) - 1.0;
        let ndc_y = 1.0 - 2.0 * ((f64::from(j) + 0.5) / f64::from(self.image_height));
        unit_vector(Vec3::new(
            ndc_x * self.half_height * self.aspect_ratio,
            ndc_y * self.half_height,
            -1.0,
        ))
    }

    /// Primary ray through pixel (`i`, `j`).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.center, self.ray_direction(i, j))
    }
}
