//! Frame driver: one primary ray per pixel, resolved against the scene.
//!
//! Pixels are independent of each other, so they are evaluated on the rayon pool. The frame
//! buffer is indexed row-major with the top row first, which is also the order rows are handed
//! to a [`RowSink`].

use crate::camera::{ray_for_pixel, Camera, Viewport};
use crate::color::Color;
use crate::error::OutputError;
use crate::scene::{ray_hit_color, Scene};
use log::{debug, info};
use rayon::prelude::*;
use std::time::Instant;

/// Consumer of finished image rows, top row first.
pub trait RowSink {
    /// Appends one complete row of pixels, left to right. A row terminator follows implicitly.
    fn write_row(&mut self, row: &[Color]) -> Result<(), OutputError>;
}

/// Rendered image. Owns its pixels, holds no reference to the scene it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[x as usize + y as usize * self.width as usize]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks(self.width as usize)
    }

    /// Streams all rows into `sink` in row-major order.
    pub fn write_to<S: RowSink + ?Sized>(&self, sink: &mut S) -> Result<(), OutputError> {
        for row in self.rows() {
            sink.write_row(row)?;
        }
        Ok(())
    }
}

pub fn render(camera: &Camera, viewport: Viewport, scene: &Scene, background: Color) -> Frame {
    let image_width = viewport.width() as usize;

    debug!(
        "camera at {} looking along {} (up {}, fov {} degrees)",
        camera.position(),
        camera.forward(),
        camera.up(),
        camera.field_of_view_degrees()
    );
    debug!("scene has {} spheres", scene.len());

    let start = Instant::now();
    let mut image_data = vec![background; viewport.pixel_count()];

    image_data
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, out_color)| {
            let x = (index % image_width) as u32;
            let y = (index / image_width) as u32;

            let ray = ray_for_pixel(x, y, camera, viewport);
            *out_color = ray_hit_color(&ray, scene, background);
        });

    info!(
        "rendered {}x{} pixels in {:.2?}",
        viewport.width(),
        viewport.height(),
        start.elapsed()
    );

    Frame {
        width: viewport.width(),
        height: viewport.height(),
        pixels: image_data,
    }
}
