//! Reflection and refraction directions.

use glint_math::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

/// Refract `incident` through a surface with outward normal `normal`
/// (Snell's law).
///
/// The outside medium has index 1. If the incident direction points along the
/// normal the ray is leaving the material, so the indices swap and the normal
/// flips. Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Option<Vec3> {
    let mut cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut etai = 1.0;
    let mut etat = refractive_index;
    let mut n = normal;

    if cosi < 0.0 {
        cosi = -cosi;
        std::mem::swap(&mut etai, &mut etat);
        n = -normal;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }

    Some(incident * eta + n * (eta * cosi - k.sqrt()))
}
