//! Phong-style surface materials.

use glint_math::{Vec3, Vec4};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface description used by the shading engine.
///
/// The albedo holds the mixing weights applied to each light contribution
/// when a hit is shaded:
///
/// | component | weight for            |
/// |-----------|-----------------------|
/// | `x`       | diffuse (Lambert)     |
/// | `y`       | specular (Phong)      |
/// | `z`       | reflected ray         |
/// | `w`       | refracted ray         |
///
/// The weights do not have to sum to one; the mirror preset deliberately
/// overdrives its specular highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Mixing weights for {diffuse, specular, reflection, refraction}
    pub albedo: Vec4,

    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Color,

    /// Phong exponent of the specular highlight
    pub specular_exponent: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
}

impl Default for Material {
    /// Pure diffuse, black, non-refracting.
    fn default() -> Self {
        Self {
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    pub const IVORY: Material = Material::new(
        Vec4::new(0.6, 0.3, 0.1, 0.0),
        Color::new(0.4, 0.4, 0.3),
        50.0,
        1.0,
    );

    pub const GLASS: Material = Material::new(
        Vec4::new(0.0, 0.5, 0.1, 0.8),
        Color::new(0.6, 0.7, 0.8),
        125.0,
        1.5,
    );

    pub const RED_RUBBER: Material = Material::new(
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Color::new(0.3, 0.1, 0.1),
        10.0,
        1.0,
    );

    pub const MIRROR: Material = Material::new(
        Vec4::new(0.0, 10.0, 0.8, 0.0),
        Color::new(1.0, 1.0, 1.0),
        1425.0,
        1.0,
    );

    /// Create a new material.
    pub const fn new(
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
        refractive_index: f32,
    ) -> Self {
        Self {
            albedo,
            diffuse_color,
            specular_exponent,
            refractive_index,
        }
    }

    /// Derive a copy of this material with a different diffuse color.
    pub fn with_diffuse_color(self, diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..self
        }
    }

    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.x
    }

    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo.y
    }

    #[inline]
    pub fn reflection_weight(&self) -> f32 {
        self.albedo.z
    }

    #[inline]
    pub fn refraction_weight(&self) -> f32 {
        self.albedo.w
    }

    /// True if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.albedo.is_finite()
            && self.diffuse_color.is_finite()
            && self.specular_exponent.is_finite()
            && self.refractive_index.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.diffuse_weight(), 1.0);
        assert_eq!(m.specular_weight(), 0.0);
        assert_eq!(m.reflection_weight(), 0.0);
        assert_eq!(m.refraction_weight(), 0.0);
        assert_eq!(m.diffuse_color, Color::ZERO);
        assert_eq!(m.refractive_index, 1.0);
    }

    #[test]
    fn test_with_diffuse_color_leaves_original() {
        let base = Material::IVORY;
        let derived = base.with_diffuse_color(Color::ONE);

        assert_eq!(derived.diffuse_color, Color::ONE);
        assert_eq!(derived.albedo, base.albedo);
        assert_eq!(derived.specular_exponent, base.specular_exponent);
        // The preset itself is untouched
        assert_eq!(Material::IVORY.diffuse_color, Color::new(0.4, 0.4, 0.3));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Material::GLASS.refractive_index, 1.5);
        assert_eq!(Material::GLASS.refraction_weight(), 0.8);
        assert_eq!(Material::MIRROR.specular_weight(), 10.0);
        assert!(Material::RED_RUBBER.is_finite());
    }

    #[test]
    fn test_non_finite_material() {
        let m = Material {
            refractive_index: f32::NAN,
            ..Material::default()
        };
        assert!(!m.is_finite());
    }
}
