//! Scene files.
//!
//! A scene is a TOML document with `[[spheres]]` and `[[lights]]` tables;
//! vectors are written as three-element arrays.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::Light;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::vector::{Color, Point3};

/// Errors raised while loading a scene file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path does not exist
    #[error("scene file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid scene document
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sphere radius is zero, negative or not finite
    #[error("sphere #{index} has invalid radius {radius}")]
    InvalidSphere {
        /// Position of the sphere in the file
        index: usize,
        /// The rejected radius
        radius: f64,
    },
}

/// Sphere as written in a scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SphereConfig {
    /// Center point
    pub center: Point3,
    /// Radius, must be positive
    pub radius: f64,
    /// Base colour
    pub color: Color,
}

/// Light as written in a scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LightConfig {
    /// Light position
    pub position: Point3,
    /// Per-channel intensity
    pub color: Color,
}

/// Top-level scene document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SceneConfig {
    /// Spheres, in order
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    /// Lights, in order
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

impl SceneConfig {
    /// Parse a scene document from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate radii and build the scene.
    pub fn into_scene(self) -> Result<Scene, ConfigError> {
        let spheres = self
            .spheres
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                if s.radius > 0.0 && s.radius.is_finite() {
                    Ok(Sphere::new(s.center, s.radius, s.color))
                } else {
                    Err(ConfigError::InvalidSphere { index, radius: s.radius })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let lights = self
            .lights
            .into_iter()
            .map(|l| Light::new(l.position, l.color))
            .collect();
        Ok(Scene::new(spheres, lights))
    }
}

/// Load and validate a scene from a TOML file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    SceneConfig::from_toml(&content)?.into_scene()
}
