//! Hittable trait, HitRecord, and nearest-hit resolution over a scene.

use glint_core::{Material, Scene};
use glint_math::{Ray, Vec3};

use crate::RenderConfig;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for surfaces that can be hit by rays.
pub trait Hittable {
    /// Intersect the ray with this surface.
    ///
    /// Returns a hit only if it is nearer than `max_t` (strictly).
    fn hit(&self, ray: &Ray, max_t: f32) -> Option<HitRecord>;
}

/// Find the nearest surface hit by `ray`.
///
/// Spheres are scanned in scene order and an earlier sphere wins a tie. The
/// floor, if any, is tested last and only replaces a sphere hit when strictly
/// nearer. Hits at or beyond the visibility horizon count as misses.
pub fn resolve_hit(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Option<HitRecord> {
    let mut closest: Option<HitRecord> = None;
    let mut closest_so_far = f32::MAX;

    let surfaces = scene
        .spheres()
        .iter()
        .map(|sphere| sphere as &dyn Hittable)
        .chain(scene.floor().map(|floor| floor as &dyn Hittable));

    for surface in surfaces {
        if let Some(rec) = surface.hit(ray, closest_so_far) {
            closest_so_far = rec.t;
            closest = Some(rec);
        }
    }

    closest.filter(|rec| rec.t < config.horizon)
}
