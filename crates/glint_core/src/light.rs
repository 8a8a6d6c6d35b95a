//! Directional light with a cached unit direction.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A directional light.
///
/// User-facing controls hand in a raw, possibly non-unit vector; shading
/// only ever consumes the cached unit direction. The cache is re-derived
/// eagerly on every update — never lazily inside the trace loop — so the
/// direction read by shading is always unit length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Vec3", into = "Vec3")]
pub struct DirectionalLight {
    raw: Vec3,
    direction: Vec3,
}

impl DirectionalLight {
    /// Create a light from a raw direction vector. The vector must be
    /// non-zero.
    pub fn new(raw: Vec3) -> Self {
        Self {
            raw,
            direction: raw.normalize(),
        }
    }

    /// Change-notification handler: store the new raw vector and re-derive
    /// the unit direction before the next trace reads it.
    pub fn set_direction(&mut self, raw: Vec3) {
        self.raw = raw;
        self.direction = raw.normalize();
    }

    /// The unit-length direction consumed by shading.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The raw vector as last supplied by the caller.
    pub fn raw(&self) -> Vec3 {
        self.raw
    }
}

impl From<Vec3> for DirectionalLight {
    fn from(raw: Vec3) -> Self {
        Self::new(raw)
    }
}

impl From<DirectionalLight> for Vec3 {
    fn from(light: DirectionalLight) -> Self {
        light.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_unit_input_is_normalized() {
        let light = DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0));
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
        assert_eq!(light.raw(), Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_set_direction_rederives_cache() {
        let mut light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        light.set_direction(Vec3::new(3.0, 0.0, 4.0));

        assert!((light.direction().length() - 1.0).abs() < 1e-6);
        assert!((light.direction() - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_serde_round_trips_raw_vector() {
        let light = DirectionalLight::new(Vec3::new(0.0, -2.0, 0.0));
        let json = serde_json::to_string(&light).unwrap();
        let back: DirectionalLight = serde_json::from_str(&json).unwrap();

        assert_eq!(back.raw(), light.raw());
        assert!((back.direction().length() - 1.0).abs() < 1e-6);
    }
}
