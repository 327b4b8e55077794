//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// The event was not relevant to this widget.
    None,
    /// The event was handled and produced a message for the application.
    Message(M),
}

impl<M> EventResult<M> {
    /// Extract the message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(msg) => Some(msg),
            EventResult::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EventResult::None)
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(message: Option<M>) -> Self {
        match message {
            Some(msg) => EventResult::Message(msg),
            None => EventResult::None,
        }
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }
}
