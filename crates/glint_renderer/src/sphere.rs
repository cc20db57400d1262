//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Sphere;
use glint_math::Ray;

/// Distance along `ray` to the nearest non-negative intersection with `sphere`.
///
/// When the near root lies behind the origin (the origin is inside the sphere,
/// or the sphere's front face is behind it) the far root is used instead, so
/// rays spawned inside a transparent sphere find its far wall.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let l = sphere.center - ray.origin();
    let tca = l.dot(ray.direction());
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    let t = if t0 < 0.0 { t1 } else { t0 };
    (t >= 0.0).then_some(t)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, max_t: f32) -> Option<HitRecord> {
        let t = intersect_sphere(ray, self)?;
        if t >= max_t {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            t,
            p,
            normal: (p - self.center).normalize_or_zero(),
            material: self.material,
        })
    }
}
