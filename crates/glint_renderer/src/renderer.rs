//! Core Whitted-style ray tracer.
//!
//! Implements recursive backward ray tracing with:
//! - Lambert diffuse and Phong specular from point lights, with hard shadows
//! - Mirror reflection and Snell refraction, bounded by a depth cap
//! - Environment map background for escaping rays
//! - Max-channel tone mapping

use std::time::Instant;

use glint_core::{Color, EnvironmentMap, Scene};
use glint_math::{Interval, Ray, Vec3};
use image::{Rgb, RgbImage};
use serde::Deserialize;
use thiserror::Error;

use crate::hittable::{resolve_hit, HitRecord};
use crate::optics::{reflect, refract};
use crate::Camera;

/// Deepest recursion `RenderConfig::validate` accepts. Every hit spawns a
/// reflected and a refracted ray, so the work grows as 2^max_depth.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Errors reported before rendering starts.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Ray bias must be finite and non-negative, got {0}")]
    InvalidBias(f32),

    #[error("Visibility horizon must be positive, got {0}")]
    InvalidHorizon(f32),

    #[error("Max depth {0} exceeds the limit of {}", MAX_DEPTH_LIMIT)]
    InvalidMaxDepth(u32),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Deepest recursion level that still shades a hit
    pub max_depth: u32,
    /// Offset along the normal for secondary and shadow ray origins
    pub bias: f32,
    /// Hits at or beyond this distance count as escaping the scene
    pub horizon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: 60.0,
            max_depth: 4,
            bias: 1e-3,
            horizon: 1000.0,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration can produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        // The pixel count must fit a u32 so buffer sizes and indices cannot wrap
        let pixel_count = self.width.checked_mul(self.height);
        if self.width == 0 || self.height == 0 || pixel_count.is_none() {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        if !Interval::new(0.0, 180.0).surrounds(self.fov) {
            return Err(RenderError::InvalidFov(self.fov));
        }

        if !self.bias.is_finite() || self.bias < 0.0 {
            return Err(RenderError::InvalidBias(self.bias));
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RenderError::InvalidMaxDepth(self.max_depth));
        }

        // NaN fails the comparison too
        if !(self.horizon > 0.0) {
            return Err(RenderError::InvalidHorizon(self.horizon));
        }

        Ok(())
    }
}

/// Compute the color seen along a ray.
///
/// This is the core shading function. Past `config.max_depth`, or when the
/// ray escapes, the environment map supplies the color. Otherwise the hit is
/// lit by every unshadowed light and the reflected and refracted rays are
/// traced one level deeper.
pub fn shade(
    ray: &Ray,
    scene: &Scene,
    environment: &EnvironmentMap,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    if depth > config.max_depth {
        return environment.sample(ray.direction());
    }

    let Some(rec) = resolve_hit(ray, scene, config) else {
        return environment.sample(ray.direction());
    };

    let dir = ray.direction();
    let material = rec.material;

    let reflect_dir = reflect(dir, rec.normal).normalize_or_zero();
    let reflect_ray = Ray::offset(rec.p, rec.normal, reflect_dir, config.bias);
    let reflect_color = shade(&reflect_ray, scene, environment, depth + 1, config);

    // Total internal reflection casts no refracted ray
    let refract_color = match refract(dir, rec.normal, material.refractive_index) {
        Some(refract_dir) => {
            let refract_dir = refract_dir.normalize_or_zero();
            let refract_ray = Ray::offset(rec.p, rec.normal, refract_dir, config.bias);
            shade(&refract_ray, scene, environment, depth + 1, config)
        }
        None => Color::ZERO,
    };

    let (diffuse, specular) = direct_lighting(&rec, dir, scene, config);

    material.diffuse_color * diffuse * material.diffuse_weight()
        + Color::ONE * specular * material.specular_weight()
        + reflect_color * material.reflection_weight()
        + refract_color * material.refraction_weight()
}

/// Sum the diffuse and specular intensity reaching a hit from all lights.
///
/// A light is skipped entirely when anything lies between the hit and the
/// light.
fn direct_lighting(
    rec: &HitRecord,
    view_dir: Vec3,
    scene: &Scene,
    config: &RenderConfig,
) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in scene.lights() {
        let to_light = light.position - rec.p;
        let light_dir = to_light.normalize_or_zero();
        let light_distance = to_light.length();

        let shadow_ray = Ray::offset(rec.p, rec.normal, light_dir, config.bias);
        if let Some(blocker) = resolve_hit(&shadow_ray, scene, config) {
            if (blocker.p - shadow_ray.origin()).length() < light_distance {
                continue;
            }
        }

        diffuse += light.intensity * light_dir.dot(rec.normal).max(0.0);
        specular += reflect(light_dir, rec.normal)
            .dot(view_dir)
            .max(0.0)
            .powf(rec.material.specular_exponent)
            * light.intensity;
    }

    (diffuse, specular)
}

/// Scale a color down by its brightest channel if that exceeds 1, then clamp
/// every channel to [0, 1].
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let color = if max > 1.0 { color / max } else { color };
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGB (truncating).
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel: shade its primary ray and tone map the result.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    environment: &EnvironmentMap,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(x, y);
    tone_map(shade(&ray, scene, environment, 0, config))
}

/// Image buffer of tone-mapped linear colors, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Quantize to an 8-bit RGB image for encoding.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(color_to_rgb(self.get(x, y))))
    }
}

/// Render the entire scene to an image buffer.
///
/// Pixels are shaded one at a time in row-major order.
pub fn render(
    scene: &Scene,
    environment: &EnvironmentMap,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    config.validate()?;

    let camera = Camera::from_config(config);
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::info!(
        "Rendering {}x{} (fov {}, max depth {}) with {} spheres, {} lights",
        config.width,
        config.height,
        config.fov,
        config.max_depth,
        scene.spheres().len(),
        scene.lights().len()
    );
    let start = Instant::now();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(&camera, scene, environment, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}
