//! Color types and the HSV to RGB conversion used by the wheel.
//!
//! `Rgb` is the value the wheel hands out: it is painted into the raster,
//! read back from the surface, and displayed/persisted as `rgb(r, g, b)`.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use thiserror::Error;

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees, expected in [0, 360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// Sector boundaries (60, 120, ...) fall into the upper sector. The hue is not
/// normalized here; use [`Hsv::to_rgb`] for unchecked input.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        channel_to_u8(r + m),
        channel_to_u8(g + m),
        channel_to_u8(b + m),
    )
}

/// Map any hue in degrees into [0, 360), including negative values.
pub fn normalize_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Degrees, [0, 360)
    pub hue: f32,
    /// [0, 1]
    pub saturation: f32,
    /// [0, 1]
    pub value: f32,
}

impl Hsv {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert to RGB, normalizing hue and clamping saturation and value first.
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(
            normalize_hue(self.hue),
            self.saturation.clamp(0.0, 1.0),
            self.value.clamp(0.0, 1.0),
        )
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Drop the alpha channel of a surface pixel.
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self { r, g, b }
    }

    /// Raster pixel with the given alpha.
    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }

    /// Largest per-channel difference to another color.
    pub fn max_channel_diff(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error parsing an `rgb(r, g, b)` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color string '{input}': expected rgb(r, g, b)")]
pub struct ParseRgbError {
    input: String,
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError {
            input: s.to_string(),
        };

        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) = (
            channels.next(),
            channels.next(),
            channels.next(),
            channels.next(),
        ) else {
            return Err(err());
        };

        Ok(Self { r, g, b })
    }
}
