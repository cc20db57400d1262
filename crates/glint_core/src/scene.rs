//! Scene description types for Glint.
//!
//! A scene is an ordered list of spheres, an ordered list of point lights and
//! an optional checkerboard floor. It is built once, before rendering, and
//! only ever read by the renderer.

use glint_math::{Interval, Vec3};
use thiserror::Error;

use crate::material::{Color, Material};

/// Errors raised while assembling a scene.
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("Sphere {index} has invalid radius {radius} (must be finite and > 0)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has a non-finite center or material")]
    NonFiniteSphere { index: usize },

    #[error("Light {index} has a non-finite position or intensity")]
    NonFiniteLight { index: usize },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Bounded horizontal floor tile with a procedural checker pattern.
///
/// The plane `y = height` is only solid where `x` lies strictly inside
/// `x_bounds` and `z` strictly inside `z_bounds`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkerboard {
    pub height: f32,
    pub x_bounds: Interval,
    pub z_bounds: Interval,
    /// Rays with `|direction.y|` at or below this are treated as parallel
    pub parallel_epsilon: f32,
    /// Edge length of one checker square
    pub tile_size: f32,
    /// Color of tiles whose index sum is odd
    pub odd_color: Color,
    /// Color of tiles whose index sum is even
    pub even_color: Color,
    /// Multiplier applied to the tile color
    pub shade: f32,
    /// Material the tile color is applied to
    pub base: Material,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_bounds: Interval::new(-10.0, 10.0),
            z_bounds: Interval::new(-30.0, -10.0),
            parallel_epsilon: 1e-3,
            tile_size: 2.0,
            odd_color: Color::new(1.0, 1.0, 1.0),
            even_color: Color::new(1.0, 0.7, 0.3),
            shade: 0.3,
            base: Material::default(),
        }
    }
}

impl Checkerboard {
    /// True if the point (x, z) on the plane lies on the tile.
    pub fn covers(&self, x: f32, z: f32) -> bool {
        self.x_bounds.surrounds(x) && self.z_bounds.surrounds(z)
    }

    /// Procedural tile color at plane coordinates (x, z).
    pub fn color_at(&self, x: f32, z: f32) -> Color {
        let i = (x / self.tile_size).floor() as i64;
        let k = (z / self.tile_size).floor() as i64;
        let tile = if (i + k).rem_euclid(2) == 1 {
            self.odd_color
        } else {
            self.even_color
        };
        tile * self.shade
    }

    /// Material for a hit at `point`, derived fresh for every hit.
    pub fn material_at(&self, point: Vec3) -> Material {
        self.base.with_diffuse_color(self.color_at(point.x, point.z))
    }
}

/// A complete scene: spheres, lights and an optional floor.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    floor: Option<Checkerboard>,
}

impl Scene {
    /// Create an empty scene without a floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkerboard floor.
    pub fn with_floor(mut self, floor: Checkerboard) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Add a sphere, rejecting degenerate geometry.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SceneResult<()> {
        let index = self.spheres.len();

        if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
            return Err(SceneError::InvalidRadius {
                index,
                radius: sphere.radius,
            });
        }
        if !sphere.center.is_finite() || !sphere.material.is_finite() {
            return Err(SceneError::NonFiniteSphere { index });
        }

        self.spheres.push(sphere);
        Ok(())
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) -> SceneResult<()> {
        if !light.position.is_finite() || !light.intensity.is_finite() {
            return Err(SceneError::NonFiniteLight {
                index: self.lights.len(),
            });
        }

        self.lights.push(light);
        Ok(())
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn floor(&self) -> Option<&Checkerboard> {
        self.floor.as_ref()
    }
}
