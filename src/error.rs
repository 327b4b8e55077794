//! Error types for the color wheel.

use hue_wheel_ui::SurfaceError;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while building, painting or picking from the wheel.
#[derive(Error, Debug)]
pub enum WheelError {
    /// Raster side must be a non-zero even number of pixels
    #[error("Invalid wheel size {side}: side length must be even and non-zero")]
    InvalidSide {
        /// The rejected side length
        side: u32,
    },

    /// A pick arrived before the drawing surface was attached
    #[error("Color wheel is not initialized: attach a surface first")]
    NotInitialized,

    /// The attached surface does not match the raster size
    #[error("Surface is {actual:?}, wheel raster needs {expected:?}")]
    SurfaceSizeMismatch {
        /// Raster dimensions
        expected: (u32, u32),
        /// Surface dimensions
        actual: (u32, u32),
    },

    /// Drawing surface failure
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Durable storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for wheel operations.
pub type WheelResult<T> = Result<T, WheelError>;
