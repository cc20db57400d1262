//! Built-in scenes.

use glint_math::Vec3;

use crate::material::Material;
use crate::scene::{Checkerboard, Light, Scene, SceneResult, Sphere};

/// The classic four-sphere, three-light scene over a checkerboard floor.
///
/// Ivory, glass, red rubber and a large mirror, seen from the origin looking
/// down -Z.
pub fn reference_scene() -> SceneResult<Scene> {
    let mut scene = Scene::new().with_floor(Checkerboard::default());

    scene.add_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::IVORY))?;
    scene.add_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::GLASS))?;
    scene.add_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::RED_RUBBER))?;
    scene.add_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::MIRROR))?;

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5))?;
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8))?;
    scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7))?;

    log::debug!(
        "Built reference scene: {} spheres, {} lights",
        scene.spheres().len(),
        scene.lights().len()
    );

    Ok(scene)
}
