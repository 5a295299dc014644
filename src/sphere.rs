use crate::color::Color;
use crate::error::ConfigError;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    color: Color,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, color: Color) -> Result<Sphere, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::DegenerateSphere { radius });
        }
        Ok(Sphere {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Ray parameter of the near surface of `sphere`, if the ray reaches it.
///
/// For unit-length directions (all camera rays) the parameter is the distance from the origin.
///
/// NOTE: Spheres whose center projects behind (or onto) the ray origin are rejected outright,
///       even when the ray would still cross their surface going forward. A ray starting inside
///       the sphere can therefore report a negative distance, which callers must treat as no
///       forward hit.
pub fn ray_hit_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let direction_length_squared = ray.direction.length_squared();
    let t_closest =
        Vec3::dot(ray.direction, sphere.center - ray.origin) / direction_length_squared;
    if !(t_closest > 0.0) {
        return None;
    }

    let closest_point = ray.point_at_parameter(t_closest);
    let perpendicular_squared = (closest_point - sphere.center).length_squared();
    let radius_squared = sphere.radius * sphere.radius;
    if perpendicular_squared > radius_squared {
        return None;
    }

    let offset = f64::sqrt((radius_squared - perpendicular_squared) / direction_length_squared);
    Some(t_closest - offset)
}
