//! Global constants for the color wheel

/// Default side length of the square wheel raster, in pixels
pub const DEFAULT_WHEEL_SIDE: u32 = 300;

/// Durable storage key for the last picked color
pub const LAST_COLOR_KEY: &str = "hue-wheel.last-color";

/// Value (brightness) used for every rasterized pixel
pub const WHEEL_VALUE: f32 = 1.0;

/// Alpha written for pixels on the disc
pub const OPAQUE: u8 = 255;

/// Alpha written for pixels outside the disc
pub const TRANSPARENT: u8 = 0;
