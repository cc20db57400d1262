use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Rays are used for raytracing - they represent a half-line starting at
/// `origin` and traveling in `direction`. The direction is not required to be
/// unit length, but every ray the renderer spawns is normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Spawn a secondary ray from `point`, nudged by `bias` along `normal` so
    /// it starts on the side of the surface that `direction` travels into.
    pub fn offset(point: Vec3, normal: Vec3, direction: Vec3, bias: f32) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * bias
        } else {
            point + normal * bias
        };
        Self::new(origin, direction)
    }
}
