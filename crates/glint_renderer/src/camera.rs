//! Camera for primary ray generation.

use glint_math::{Ray, Vec3};

use crate::RenderConfig;

/// Pinhole camera at the origin looking down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    half_height: f32,
    aspect: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            vfov: 60.0,
            half_height: 0.0,
            aspect: 1.0,
        }
    }

    /// Build and initialize a camera matching a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut camera = Self::new()
            .with_resolution(config.width, config.height)
            .with_fov(config.fov);
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.half_height = (self.vfov.to_radians() / 2.0).tan();
        self.aspect = self.image_width as f32 / self.image_height as f32;
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// Row 0 is the top of the image, column 0 the left.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f32 + 0.5) / self.image_width as f32 - 1.0)
            * self.half_height
            * self.aspect;
        let y = -(2.0 * (j as f32 + 0.5) / self.image_height as f32 - 1.0) * self.half_height;

        Ray::new(Vec3::ZERO, Vec3::new(x, y, -1.0).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
