//! hue_wheel - A hue/saturation color wheel picker
//!
//! Rasterizes a polar hue/saturation disc onto a drawing surface and turns
//! clicks on it into `rgb(r, g, b)` colors that persist across reloads.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod picker;
pub mod raster;
pub mod storage;

pub use color::{Hsv, ParseRgbError, Rgb, hsv_to_rgb, normalize_hue};
pub use config::{ConfigError, LogLevel, OutsidePolicy, WheelConfig};
pub use error::{WheelError, WheelResult};
pub use picker::{ColorWheel, PickOutcome, RejectReason, WheelState};
pub use raster::WheelRaster;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
