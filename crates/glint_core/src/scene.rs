//! Scene description and JSON config loading.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DirectionalLight, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("malformed scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("light direction must be a non-zero vector")]
    DegenerateLight,
}

/// Everything the renderer reads while tracing a frame.
///
/// Externally mutable between frames; a frame in flight sees one consistent
/// copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub sphere: Sphere,
    pub light: DirectionalLight,
    /// Debug toggle: when false, hits shade as flat magenta and the
    /// lighting math is skipped.
    pub shading: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            sphere: Sphere::new(Vec3::ZERO, 1.0),
            light: DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0)),
            shading: true,
        }
    }
}

impl Scene {
    /// Parse and validate a JSON scene description.
    ///
    /// Missing fields fall back to the defaults. Data arriving from files is
    /// the one place preconditions are checked rather than documented.
    pub fn from_json_str(json: &str) -> Result<Scene, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        log::debug!(
            "scene config loaded: sphere r={} at {}, shading={}",
            scene.sphere.radius,
            scene.sphere.center,
            scene.shading
        );
        Ok(scene)
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !(self.sphere.radius > 0.0) {
            return Err(SceneError::InvalidRadius(self.sphere.radius));
        }
        if self.light.raw().length_squared() == 0.0 {
            return Err(SceneError::DegenerateLight);
        }
        Ok(())
    }
}
