//! Drawing surfaces that accept whole-buffer paints and single-pixel read-back
//!
//! A surface is the render target a raster widget paints onto. Widgets never
//! keep their own copy of what is on screen; picks read the painted pixel back
//! from the surface so they reflect exactly what was drawn.

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::layout::{Bounds, Size};

/// Errors reported by a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The rendering context could not be obtained
    #[error("Rendering context unavailable: {0}")]
    ContextUnavailable(String),

    /// A painted buffer does not match the surface dimensions
    #[error("Buffer is {actual_width}x{actual_height}, surface is {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Backend-specific failure (e.g. a JavaScript exception)
    #[error("Surface backend error: {0}")]
    Backend(String),
}

/// A fixed-size drawing target.
pub trait Surface {
    /// Pixel dimensions of the surface.
    fn size(&self) -> (u32, u32);

    /// On-screen bounding box, used to translate pointer coordinates.
    fn bounds(&self) -> Bounds;

    /// Replace the surface contents with `image` in one paint operation.
    fn put_image(&mut self, image: &RgbaImage) -> Result<(), SurfaceError>;

    /// Read back a single pixel in surface-local coordinates.
    ///
    /// Returns `Ok(None)` when the coordinate lies outside the surface.
    fn read_pixel(&self, x: u32, y: u32) -> Result<Option<Rgba<u8>>, SurfaceError>;

    /// Check that a buffer has the surface dimensions.
    fn check_size(&self, image: &RgbaImage) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        if image.dimensions() != (width, height) {
            return Err(SurfaceError::SizeMismatch {
                width,
                height,
                actual_width: image.width(),
                actual_height: image.height(),
            });
        }
        Ok(())
    }
}

/// An in-memory surface backed by an `RgbaImage`.
///
/// Starts fully transparent. The on-screen origin is configurable so pointer
/// translation can be exercised without a window.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    pixels: RgbaImage,
    origin: (f32, f32),
}

impl ImageSurface {
    /// Create a transparent surface placed at the screen origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            origin: (0.0, 0.0),
        }
    }

    /// Place the surface at a screen position.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }
}

impl Surface for ImageSurface {
    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn bounds(&self) -> Bounds {
        let (width, height) = self.size();
        Bounds::from_origin(self.origin, Size::new(width as f32, height as f32))
    }

    fn put_image(&mut self, image: &RgbaImage) -> Result<(), SurfaceError> {
        self.check_size(image)?;
        self.pixels.clone_from(image);
        log::trace!("ImageSurface: painted {}x{} buffer", image.width(), image.height());
        Ok(())
    }

    fn read_pixel(&self, x: u32, y: u32) -> Result<Option<Rgba<u8>>, SurfaceError> {
        Ok(self.pixels.get_pixel_checked(x, y).copied())
    }
}

/// A surface over a browser `<canvas>` element's 2D context.
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    canvas: web_sys::HtmlCanvasElement,
    context: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    /// Wrap a canvas element, failing fast if it has no 2D context.
    pub fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, SurfaceError> {
        use wasm_bindgen::JsCast;

        let context = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| SurfaceError::ContextUnavailable("2d context not supported".to_string()))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| {
                SurfaceError::ContextUnavailable("Context is not a 2d rendering context".to_string())
            })?;

        Ok(Self { canvas, context })
    }

    /// Look up a canvas element by id and wrap it.
    pub fn from_element_id(id: &str) -> Result<Self, SurfaceError> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::ContextUnavailable("No document object".to_string()))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::ContextUnavailable(format!("No element with id '{}'", id)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::ContextUnavailable(format!("Element '{}' is not a canvas", id)))?;

        Self::new(canvas)
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn bounds(&self) -> Bounds {
        let rect = self.canvas.get_bounding_client_rect();
        Bounds::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn put_image(&mut self, image: &RgbaImage) -> Result<(), SurfaceError> {
        self.check_size(image)?;
        let data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            wasm_bindgen::Clamped(image.as_raw().as_slice()),
            image.width(),
            image.height(),
        )
        .map_err(|e| SurfaceError::Backend(format!("ImageData creation failed: {:?}", e)))?;

        self.context
            .put_image_data(&data, 0.0, 0.0)
            .map_err(|e| SurfaceError::Backend(format!("putImageData failed: {:?}", e)))
    }

    fn read_pixel(&self, x: u32, y: u32) -> Result<Option<Rgba<u8>>, SurfaceError> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Ok(None);
        }
        let data = self
            .context
            .get_image_data(x as f64, y as f64, 1.0, 1.0)
            .map_err(|e| SurfaceError::Backend(format!("getImageData failed: {:?}", e)))?;
        let bytes = data.data().0;
        match bytes.as_slice() {
            [r, g, b, a, ..] => Ok(Some(Rgba([*r, *g, *b, *a]))),
            _ => Err(SurfaceError::Backend("getImageData returned no pixel".to_string())),
        }
    }
}
