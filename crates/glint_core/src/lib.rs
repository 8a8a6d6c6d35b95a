//! Glint Core - scene model for the single-sphere tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `DirectionalLight`, `Scene`
//! - **Config I/O**: JSON scene descriptions with validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::Scene;
//!
//! let scene = Scene::from_json_str(r#"{"shading": false}"#)?;
//! assert!(!scene.shading);
//! ```

pub mod light;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use light::DirectionalLight;
pub use scene::{Scene, SceneError};
pub use sphere::Sphere;
