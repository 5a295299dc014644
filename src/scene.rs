use crate::color::Color;
use crate::ray::Ray;
use crate::sphere::{ray_hit_sphere, Sphere};

/// Ordered set of spheres. Order only matters when two hits are exactly equally far away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            spheres: Vec::new(),
        }
    }

    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl From<Vec<Sphere>> for Scene {
    fn from(spheres: Vec<Sphere>) -> Self {
        Scene { spheres }
    }
}

impl std::iter::FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Scene {
            spheres: iter.into_iter().collect(),
        }
    }
}

/// Color of the nearest sphere hit in front of the ray origin, or `background`.
///
/// Every sphere is tested; the first one wins only on an exact distance tie.
pub fn ray_hit_color(ray: &Ray, scene: &Scene, background: Color) -> Color {
    let mut t_max = std::f64::INFINITY;
    let mut current_color = background;

    for sphere in &scene.spheres {
        if let Some(t) = ray_hit_sphere(ray, sphere) {
            if t > 0.0 && t < t_max {
                t_max = t;
                current_color = sphere.color();
            }
        }
    }

    current_color
}
