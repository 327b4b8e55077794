//! Hue/saturation wheel rasterization.
//!
//! The wheel is a square `RgbaImage` of even side S. Pixel offsets from the
//! center run from -R to R-1 with R = S/2. Inside the inscribed circle the
//! polar angle gives the hue and the normalized distance gives the saturation,
//! at full value. Everything outside the circle is fully transparent.

use std::f32::consts::PI;

use image::{Rgba, RgbaImage};

use crate::color::{Hsv, hsv_to_rgb};
use crate::constants::{OPAQUE, TRANSPARENT, WHEEL_VALUE};
use crate::error::{WheelError, WheelResult};

/// The wheel's pixel buffer plus its geometry.
#[derive(Debug, Clone)]
pub struct WheelRaster {
    side: u32,
    buffer: RgbaImage,
    rendered: bool,
}

impl WheelRaster {
    /// Create an unrendered raster with the given side length.
    pub fn new(side: u32) -> WheelResult<Self> {
        if side == 0 || side % 2 != 0 {
            return Err(WheelError::InvalidSide { side });
        }
        Ok(Self {
            side,
            buffer: RgbaImage::new(side, side),
            rendered: false,
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Disc radius in pixels (S/2). Also the center coordinate on both axes.
    pub fn radius(&self) -> f32 {
        (self.side / 2) as f32
    }

    /// Whether `render` has populated the buffer.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Recompute every pixel of the wheel.
    ///
    /// Always regenerates the whole buffer; the result only depends on the side
    /// length, so repeated calls produce identical pixels.
    pub fn render(&mut self) -> &RgbaImage {
        let radius = self.radius();
        for (x, y, pixel) in self.buffer.enumerate_pixels_mut() {
            let (dx, dy) = (x as f32 - radius, y as f32 - radius);
            *pixel = wheel_pixel(dx, dy, radius);
        }
        self.rendered = true;
        log::debug!(
            "Rasterized {}x{} color wheel (radius {})",
            self.side,
            self.side,
            radius
        );
        &self.buffer
    }

    /// Offset of a pixel from the wheel center.
    fn offset(&self, x: u32, y: u32) -> (f32, f32) {
        let radius = self.radius();
        (x as f32 - radius, y as f32 - radius)
    }

    /// Whether a pixel lies on the disc (and is therefore opaque once rendered).
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.side || y >= self.side {
            return false;
        }
        let (dx, dy) = self.offset(x, y);
        dx.hypot(dy) <= self.radius()
    }

    /// The hue/saturation/value a pixel encodes, or `None` off the disc.
    ///
    /// Hue is `atan2 + PI` in degrees and can be exactly 360 on the negative x
    /// axis, which converts to the same color as 0.
    pub fn hsv_at(&self, x: u32, y: u32) -> Option<Hsv> {
        if !self.contains(x, y) {
            return None;
        }
        let (dx, dy) = self.offset(x, y);
        Some(polar_hsv(dx, dy, self.radius()))
    }

    /// Project a local point onto the nearest pixel that lies on the disc.
    ///
    /// Points already on the disc map to the pixel containing them.
    pub fn nearest_inside(&self, x: f32, y: f32) -> (u32, u32) {
        let radius = self.radius();
        let (px, py) = (x.floor(), y.floor());
        if px >= 0.0 && py >= 0.0 {
            let (ix, iy) = (px as u32, py as u32);
            if self.contains(ix, iy) {
                return (ix, iy);
            }
        }

        let (dx, dy) = (px - radius, py - radius);
        let distance = dx.hypot(dy);
        // Scaling onto radius - 1 leaves room for rounding: the rounded point
        // is within radius - 1 + sqrt(0.5) of the center and inside the buffer.
        let scale = (radius - 1.0).max(0.0) / distance;
        let (nx, ny) = ((dx * scale).round(), (dy * scale).round());
        ((radius + nx) as u32, (radius + ny) as u32)
    }
}

/// HSV encoded at an offset from the center, ignoring the disc boundary.
fn polar_hsv(dx: f32, dy: f32, radius: f32) -> Hsv {
    let angle = dy.atan2(dx) + PI;
    Hsv::new(angle.to_degrees(), dx.hypot(dy) / radius, WHEEL_VALUE)
}

/// Raster pixel for an offset from the center.
fn wheel_pixel(dx: f32, dy: f32, radius: f32) -> Rgba<u8> {
    if dx.hypot(dy) > radius {
        return Rgba([0, 0, 0, TRANSPARENT]);
    }
    let hsv = polar_hsv(dx, dy, radius);
    hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value).to_rgba(OPAQUE)
}
