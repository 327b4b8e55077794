//! Callback abstraction for widget event handlers
//!
//! Instead of manually writing `Option<Box<dyn Fn(T) -> M>>` in every widget,
//! widgets can use `Callback<T, M>` which encapsulates this pattern.
//!
//! # Examples
//!
//! ```ignore
//! use hue_wheel_ui::Callback;
//!
//! struct MyWidget<M> {
//!     on_pick: Callback<[u8; 3], M>,
//! }
//!
//! impl<M> MyWidget<M> {
//!     fn on_pick<F>(mut self, callback: F) -> Self
//!     where
//!         F: Fn([u8; 3]) -> M + 'static,
//!     {
//!         self.on_pick = Callback::new(callback);
//!         self
//!     }
//! }
//! ```

use std::fmt;

/// A callback wrapper that encapsulates optional event handlers.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g., a picked color)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
