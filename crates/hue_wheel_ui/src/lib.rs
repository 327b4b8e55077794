//! hue_wheel_ui - Minimal UI plumbing for pixel-surface widgets
//!
//! This crate provides the pointer events, geometry, callbacks and drawing
//! surfaces that raster widgets are built on.

mod callback;
mod event;
mod layout;
mod logging;
mod surface;
mod widget;

pub use callback::Callback;
pub use event::{Event, MouseButton};
pub use layout::{Bounds, Size};
pub use logging::init_logging;
pub use surface::{ImageSurface, Surface, SurfaceError};
pub use widget::{EventResult, Widget};

#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;
