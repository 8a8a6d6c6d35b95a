//! Camera collaborator: a shared ray origin plus a cached per-pixel
//! direction grid.

use glam::Vec3;

/// Source of primary rays for a frame.
///
/// The renderer reads one shared origin and one direction per pixel,
/// row-major, indexed identically to the film. Implementations recompute the
/// grid whenever the viewport or orientation changes; the renderer never
/// normalizes or validates the directions.
pub trait Camera {
    /// Ray origin shared by every pixel this frame.
    fn position(&self) -> Vec3;

    /// Per-pixel ray directions, row-major, length = width * height.
    /// Directions need not be unit length, but must be non-zero.
    fn ray_directions(&self) -> &[Vec3];
}

/// A pinhole camera that caches its per-pixel ray directions.
///
/// The grid is empty until the first [`PinholeCamera::resize`]; rebuilds
/// happen only on a genuine dimension change. Orientation is fixed at
/// construction (position, look-at, world up +Y).
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    position: Vec3,
    forward: Vec3,
    /// Vertical field of view in degrees
    vfov: f32,

    // Cached values (rebuilt by recompute_ray_directions)
    width: u32,
    height: u32,
    ray_directions: Vec<Vec3>,
}

impl PinholeCamera {
    /// Create a camera at `position` looking at `look_at`.
    ///
    /// The view direction must not be parallel to the world up axis.
    pub fn new(position: Vec3, look_at: Vec3, vfov: f32) -> Self {
        Self {
            position,
            forward: (look_at - position).normalize(),
            vfov,
            width: 0,
            height: 0,
            ray_directions: Vec::new(),
        }
    }

    /// Viewport notification. Rebuilds the direction grid only when the
    /// dimensions actually change.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.recompute_ray_directions();
    }

    /// Rebuild the cached grid: one unit direction per pixel, row-major,
    /// origin top-left, +y in view space pointing up.
    fn recompute_ray_directions(&mut self) {
        let right = self.forward.cross(Vec3::Y).normalize();
        let up = right.cross(self.forward);

        let tan_half_fov = (self.vfov.to_radians() / 2.0).tan();
        let aspect = self.width as f32 / self.height as f32;

        let mut directions = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            // Pixel centers, remapped from [0, 1] to [-1, 1] with y flipped
            // so the top row looks up
            let v = 1.0 - ((y as f32 + 0.5) / self.height as f32) * 2.0;
            for x in 0..self.width {
                let u = ((x as f32 + 0.5) / self.width as f32) * 2.0 - 1.0;
                let direction = self.forward
                    + u * tan_half_fov * aspect * right
                    + v * tan_half_fov * up;
                directions.push(direction.normalize());
            }
        }

        self.ray_directions = directions;
    }
}

impl Camera for PinholeCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn ray_directions(&self) -> &[Vec3] {
        &self.ray_directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> PinholeCamera {
        PinholeCamera::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, 45.0)
    }

    #[test]
    fn test_grid_matches_viewport() {
        let mut camera = test_camera();
        assert!(camera.ray_directions().is_empty());

        camera.resize(64, 32);
        assert_eq!(camera.ray_directions().len(), 64 * 32);
    }

    #[test]
    fn test_resize_same_size_is_noop() {
        let mut camera = test_camera();
        camera.resize(64, 32);
        let before = camera.ray_directions().as_ptr();

        camera.resize(64, 32);
        assert_eq!(camera.ray_directions().as_ptr(), before);
    }

    #[test]
    fn test_center_pixel_points_forward() {
        let mut camera = test_camera();
        // Odd dimensions put a pixel center exactly on the view axis
        camera.resize(65, 33);

        let center = camera.ray_directions()[(33 / 2) * 65 + 65 / 2];
        assert!((center - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_top_row_looks_up() {
        let mut camera = test_camera();
        camera.resize(65, 33);

        let top_center = camera.ray_directions()[65 / 2];
        let bottom_center = camera.ray_directions()[32 * 65 + 65 / 2];
        assert!(top_center.y > 0.0);
        assert!(bottom_center.y < 0.0);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let mut camera = test_camera();
        camera.resize(16, 9);

        for direction in camera.ray_directions() {
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
    }
}
