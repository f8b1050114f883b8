//! spheretrace: a recursive ray tracer for spheres
//!
//! Casts one primary ray per pixel, shades hits with Lambertian diffuse light
//! and jittered soft shadows, and follows mirror reflections to a bounded
//! depth. Rows are rendered in parallel into a flat colour buffer that can be
//! written as BMP, PNG or EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod interval;
pub mod ray;
pub mod material;
pub mod sphere;
pub mod hittable;
pub mod light;
pub mod scene;
pub mod random;
pub mod tracer;
pub mod camera;
pub mod render;
pub mod config;
pub mod output;

pub use render::{render, render_with, RenderSettings};
pub use scene::Scene;
pub use vector::Color;
