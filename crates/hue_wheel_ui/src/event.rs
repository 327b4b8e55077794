//! Pointer events delivered to widgets

/// Events that widgets can respond to.
///
/// Positions are absolute screen coordinates; widgets translate them into
/// their own local space using their bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Mouse button released. A press followed by a release is a click.
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Mouse moved.
    MouseMove { position: (f32, f32) },
}

impl Event {
    /// Convenience constructor for a left-button click (release) at a position.
    pub fn left_click(x: f32, y: f32) -> Self {
        Event::MouseRelease {
            button: MouseButton::Left,
            position: (x, y),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
