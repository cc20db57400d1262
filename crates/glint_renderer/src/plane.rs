//! Checkerboard floor intersection.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Checkerboard;
use glint_math::{Ray, Vec3};

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray, max_t: f32) -> Option<HitRecord> {
        let dir = ray.direction();
        if dir.y.abs() <= self.parallel_epsilon {
            return None;
        }

        let t = -(ray.origin().y - self.height) / dir.y;
        if !(t > 0.0 && t < max_t) {
            return None;
        }

        let p = ray.at(t);
        if !self.covers(p.x, p.z) {
            return None;
        }

        Some(HitRecord {
            t,
            p,
            normal: Vec3::Y,
            material: self.material_at(p),
        })
    }
}
