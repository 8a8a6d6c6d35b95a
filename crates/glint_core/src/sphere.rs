//! Sphere primitive for ray tracing.

use glam::Vec3;
use glint_math::Ray;
use serde::{Deserialize, Serialize};

/// The single implicit surface in the scene.
///
/// Scene controls mutate the fields between frames; the renderer only reads
/// them. The radius must be positive — that is a caller contract, not a
/// checked error path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance along `ray` to the nearest surface point, or `None` if the
    /// ray misses the sphere entirely.
    ///
    /// Solves the ray-sphere quadratic and takes the near root only. The far
    /// root is never computed: a ray starting inside the sphere reports the
    /// surface behind its origin as a negative distance rather than the far
    /// wall, and negative distances are returned as-is. The direction must
    /// be non-zero.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }
}
