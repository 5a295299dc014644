//! Built-in scene rendered by the `raycast` binary.

use crate::color::Color;
use crate::error::ConfigError;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::vec3::Vec3;

pub const BACKGROUND: Color = Color::new(0, 0, 128);

/// Two touching spheres, green and red, ten units ahead of the default camera, above a huge
/// sphere that acts as the floor.
pub fn create_scene() -> Result<Scene, ConfigError> {
    let mut scene = Scene::new();

    scene.add(Sphere::new(
        Vec3::new(-1.0, 10.0, 0.0),
        2.0,
        Color::new(0, 200, 0),
    )?);
    scene.add(Sphere::new(
        Vec3::new(1.4, 10.0, 0.0),
        2.0,
        Color::new(200, 0, 0),
    )?);

    // Floor
    scene.add(Sphere::new(
        Vec3::new(0.0, 1e5, -1e6),
        1e6 - 1.0,
        Color::new(200, 200, 222),
    )?);

    Ok(scene)
}
