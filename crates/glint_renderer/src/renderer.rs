//! Frame rendering: ray generation, sphere intersection, shading, packing.

use glam::Vec4;
use glint_core::Scene;
use glint_math::Ray;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color::pack_rgba;
use crate::film::Film;

/// Background color for rays that miss the sphere.
const BACKGROUND: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Flat hit color when shading is disabled: confirms the intersection
/// without paying for lighting.
const DEBUG_HIT: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

/// Renders frames of a scene into its film.
pub struct Renderer {
    scene: Scene,
    film: Film,
}

impl Renderer {
    /// Create a renderer for the given scene. The film is empty until the
    /// first [`Renderer::on_resize`].
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            film: Film::new(),
        }
    }

    /// Viewport notification. Reallocates the film only on a genuine
    /// dimension change. Must not be called while a frame is in flight.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.film.resize(width, height);
    }

    /// Render one frame and publish it.
    ///
    /// Visits every pixel exactly once, row-major, building each ray from
    /// the camera's shared origin and per-pixel direction. Scanlines are
    /// traced on the rayon pool — rows write disjoint slices of the working
    /// buffer, so the result is identical to a sequential sweep. Blocks
    /// until the finished frame has been published as a single update.
    pub fn render(&mut self, camera: &dyn Camera) {
        let width = self.film.width() as usize;
        if width == 0 {
            return;
        }

        let directions = camera.ray_directions();
        assert_eq!(
            directions.len(),
            self.film.pixel_count(),
            "camera direction grid does not match film dimensions"
        );

        let origin = camera.position();
        let scene = self.scene;

        self.film
            .pixels_mut()
            .par_chunks_mut(width)
            .zip(directions.par_chunks(width))
            .for_each(|(row, row_directions)| {
                for (pixel, direction) in row.iter_mut().zip(row_directions) {
                    let ray = Ray::new(origin, *direction);
                    let color = trace(&scene, &ray).clamp(Vec4::ZERO, Vec4::ONE);
                    *pixel = pack_rgba(color);
                }
            });

        self.film.publish();
    }

    /// The scene as the next frame will read it.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access for external controls (sphere, light, shading
    /// toggle). Light changes go through
    /// [`glint_core::DirectionalLight::set_direction`], which re-derives the
    /// cached unit direction before the next frame reads it.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The film, for presenting or saving the published frame.
    pub fn film(&self) -> &Film {
        &self.film
    }
}

/// Color seen along one ray, unclamped.
///
/// The miss test always runs first: the debug magenta branch still requires
/// the ray to actually meet the sphere.
fn trace(scene: &Scene, ray: &Ray) -> Vec4 {
    let Some(t) = scene.sphere.intersect(ray) else {
        return BACKGROUND;
    };

    if !scene.shading {
        return DEBUG_HIT;
    }

    let hit_point = ray.at(t);
    let base_color = hit_point.normalize() * 0.5 + 0.5;

    let normal = (hit_point - scene.sphere.center).normalize();
    let light_level = normal.dot(-scene.light.direction()).max(0.0);

    (base_color * light_level).extend(1.0)
}
