//! Core UI functionality for the demo application.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal event polling and frame timing

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
