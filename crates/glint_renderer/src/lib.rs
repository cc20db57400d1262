//! Glint Renderer - CPU Whitted-style ray tracing
//!
//! A recursive backward ray tracer for spheres and a checkerboard floor lit
//! by point lights, with mirror reflection, refraction, hard shadows and an
//! environment map background.

mod camera;
mod hittable;
mod optics;
mod plane;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use hittable::{resolve_hit, HitRecord, Hittable};
pub use optics::{reflect, refract};
pub use renderer::{
    color_to_rgb, render, render_pixel, shade, tone_map, ImageBuffer, RenderConfig, RenderError,
    RenderResult, MAX_DEPTH_LIMIT,
};
pub use sphere::intersect_sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
