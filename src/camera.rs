//! Pinhole camera and raster dimensions.
//!
//! The camera is described by its pose (position, forward and up axes) plus a field of view.
//! Primary rays all start at the camera position and pass through a virtual image plane one
//! unit along `forward`, spanned by `right = forward x up` and `up`.

use crate::error::ConfigError;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Output raster size in pixels. Both dimensions are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Viewport, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        Ok(Viewport { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Pixel whose ray runs straight down the camera's forward axis.
    ///
    /// Exact only when both dimensions are even; otherwise it is the pixel just off center.
    pub fn center_pixel(&self) -> (u32, u32) {
        (self.width / 2, self.height - 1 - self.height / 2)
    }
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    field_of_view_degrees: f64,
}

impl Camera {
    /// NOTE: `forward` and `up` are used as given, neither is normalized nor orthogonalized.
    ///       They only have to be finite, non-zero and non-parallel.
    pub fn new(
        position: Vec3,
        forward: Vec3,
        up: Vec3,
        field_of_view_degrees: f64,
    ) -> Result<Camera, ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::DegenerateCamera("position is not finite"));
        }
        if !forward.is_finite() || forward.length_squared() == 0.0 {
            return Err(ConfigError::DegenerateCamera(
                "forward must be finite and non-zero",
            ));
        }
        if !up.is_finite() || up.length_squared() == 0.0 {
            return Err(ConfigError::DegenerateCamera(
                "up must be finite and non-zero",
            ));
        }
        let right = Vec3::cross(forward, up);
        if right.length() <= 1e-12 * forward.length() * up.length() {
            return Err(ConfigError::DegenerateCamera(
                "forward and up are parallel",
            ));
        }
        if !field_of_view_degrees.is_finite()
            || field_of_view_degrees <= 0.0
            || field_of_view_degrees >= 90.0
        {
            return Err(ConfigError::InvalidFieldOfView(field_of_view_degrees));
        }

        Ok(Camera {
            position,
            forward,
            up,
            field_of_view_degrees,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn field_of_view_degrees(&self) -> f64 {
        self.field_of_view_degrees
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            position: Vec3::zero(),
            forward: Vec3::unit_y(),
            up: Vec3::unit_z(),
            field_of_view_degrees: 35.0,
        }
    }
}

/// Primary ray through pixel `(x, y)`, with row 0 at the top of the image.
///
/// `x` and `y` are not bounds checked. The returned direction is unit length.
pub fn ray_for_pixel(x: u32, y: u32, camera: &Camera, viewport: Viewport) -> Ray {
    let right = Vec3::cross(camera.forward, camera.up);

    let y_factor = f64::tan(camera.field_of_view_degrees.to_radians());
    let x_factor = y_factor * viewport.aspect_ratio();

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    // Image rows go top to bottom while the vertical offset grows upwards.
    let x_offset = (f64::from(x) / width - 0.5) * x_factor;
    let y_offset = ((height - f64::from(y) - 1.0) / height - 0.5) * y_factor;

    let direction = camera.forward + right * x_offset + camera.up * y_offset;
    Ray::new(camera.position, direction.normalized())
}
