//! Glint Renderer - per-pixel sphere tracing on the CPU.
//!
//! For every output pixel the renderer builds a ray from the camera's
//! precomputed direction grid, intersects it with the scene's sphere, and
//! shades the hit with a single directional light. Finished frames land in a
//! [`Film`] that a display layer can blit or save.

mod camera;
mod color;
mod film;
mod renderer;

pub use camera::{Camera, PinholeCamera};
pub use color::{pack_rgba, unpack_rgba};
pub use film::{Film, FinalImage};
pub use renderer::Renderer;

/// Re-export common scene and math types
pub use glint_core::{DirectionalLight, Scene, Sphere};
pub use glint_math::{Ray, Vec3, Vec4};
