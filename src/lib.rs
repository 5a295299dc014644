//! Minimal offline ray caster.
//!
//! One ray per pixel from a pinhole camera into a scene of flat-colored spheres. Each pixel
//! takes the color of the nearest sphere in front of the camera, or the background color.
//! Rendered frames can be written as plain-text P3 pixmaps.

pub mod camera;
pub mod color;
pub mod demo;
pub mod error;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vec3;

pub use camera::{ray_for_pixel, Camera, Viewport};
pub use color::Color;
pub use error::{ConfigError, OutputError};
pub use ppm::{save_ppm, PpmWriter};
pub use ray::Ray;
pub use render::{render, Frame, RowSink};
pub use scene::{ray_hit_color, Scene};
pub use sphere::{ray_hit_sphere, Sphere};
pub use vec3::Vec3;
