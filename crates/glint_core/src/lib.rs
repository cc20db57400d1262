//! Glint Core - Scene description for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: `Material` with the ivory/glass/rubber/mirror presets
//! - **Scene types**: `Sphere`, `Light`, `Checkerboard`, `Scene`
//! - **Environment maps**: equirectangular background loading and lookup
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{presets::reference_scene, EnvironmentMap};
//!
//! let scene = reference_scene()?;
//! let environment = EnvironmentMap::load("res/envmap.jpg")?;
//! println!("{} spheres, {}x{} background",
//!     scene.spheres().len(),
//!     environment.width(),
//!     environment.height());
//! ```

pub mod environment;
pub mod material;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use environment::{EnvironmentError, EnvironmentMap, EnvironmentResult};
pub use material::{Color, Material};
pub use scene::{Checkerboard, Light, Scene, SceneError, SceneResult, Sphere};
