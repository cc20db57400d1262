//! Environment map loading and lookup.
//!
//! The environment map supplies the background color for every ray that
//! escapes the scene. It is an equirectangular image stored as RGB floats in
//! the 0-1 range and sampled by direction with nearest-pixel lookup.

use std::f32::consts::PI;
use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::material::Color;

/// Errors that can occur while building or loading an environment map.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Failed to load environment map: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Environment map has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("Environment map is {width}x{height} but holds {len} pixels")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;

/// An equirectangular background image.
///
/// Construction validates the pixel buffer, so any `EnvironmentMap` value can
/// be sampled without further checks.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    /// Row-major RGB, row 0 at the top
    pixels: Vec<Color>,
    /// Original file path (for debugging)
    path: String,
}

impl EnvironmentMap {
    /// Create an environment map from row-major pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> EnvironmentResult<Self> {
        if width == 0 || height == 0 || pixels.is_empty() {
            return Err(EnvironmentError::Empty { width, height });
        }
        if width as usize * height as usize != pixels.len() {
            return Err(EnvironmentError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            path: "<memory>".to_string(),
        })
    }

    /// Create a solid color environment (1x1).
    pub fn solid_color(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
            path: "<solid>".to_string(),
        }
    }

    /// Load an environment map from an image file.
    ///
    /// Any channel layout is converted to 8-bit RGB and scaled to 0-1 without
    /// color space conversion.
    pub fn load(path: impl AsRef<Path>) -> EnvironmentResult<Self> {
        let path = path.as_ref();

        let img = image::open(path)?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let pixels: Vec<Color> = rgb
            .pixels()
            .map(|p| Color::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
            .collect();

        let mut map = Self::new(width, height, pixels)?;
        map.path = path.to_string_lossy().to_string();

        log::debug!(
            "Loaded environment map: {} ({}x{}, {:.1} KB)",
            map.path,
            map.width,
            map.height,
            map.size_bytes() as f32 / 1024.0
        );

        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get pixel at integer coordinates, clamped to the image.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Look up the background color seen along `direction`.
    ///
    /// Longitude comes from `atan2(z, x)`, latitude from `acos(y)`, so +Y maps
    /// to the top row. A zero direction samples the center of the map.
    pub fn sample(&self, direction: Vec3) -> Color {
        let d = direction.normalize_or_zero();

        let u = d.z.atan2(d.x) / (2.0 * PI) + 0.5;
        let v = d.y.clamp(-1.0, 1.0).acos() / PI;

        let x = (u * self.width as f32).round().clamp(0.0, (self.width - 1) as f32) as u32;
        let y = (v * self.height as f32).round().clamp(0.0, (self.height - 1) as f32) as u32;

        self.pixel(x, y)
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Color>()
    }
}
