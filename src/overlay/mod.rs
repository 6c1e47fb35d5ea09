//! Dynamic overlay registry.
//!
//! Overlays are short-lived components (dialogs, prompts, message boxes) that
//! are mounted on top of the application on demand and removed once the user
//! is done with them. The [`OverlayRegistry`] owns every mounted overlay and
//! draws them in mount order, so the most recently opened one is on top.
//!
//! # Module Components
//!
//! - [`entry`] - Identifiers, attributes, event handlers and mounted entries
//! - [`registry`] - The registry itself: open, close, lookup, routing, rendering
//!
//! # Example
//!
//! ```no_run
//! use modalist::overlay::{Attributes, EventHandlers, OverlayRegistry};
//! use modalist::ui::components::dialogs::MessageDialog;
//!
//! let mut registry = OverlayRegistry::new();
//! let handlers = EventHandlers::new().on("close", |ctx, _| ctx.close());
//! let id = registry.open(MessageDialog::new(), Attributes::new(), handlers);
//! assert!(registry.contains(id));
//! ```

pub mod entry;
pub mod registry;

pub use entry::{Attributes, Emit, Entry, EventContext, EventHandler, EventHandlers, OverlayId};
pub use registry::{OverlayRegistry, RenderedOverlay};

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A component that can be mounted in an [`OverlayRegistry`].
///
/// Components never talk to the registry directly. They report user
/// interaction by returning an [`Emit`] from [`handle_key_events`], and the
/// registry runs the handler registered under that event name.
///
/// [`handle_key_events`]: OverlayComponent::handle_key_events
pub trait OverlayComponent: Send {
    /// Short name used in log lines
    fn name(&self) -> &str {
        "overlay"
    }

    /// Receive the attributes the overlay was opened with
    fn mount(&mut self, _attributes: &Attributes) {}

    fn handle_key_events(&mut self, key: KeyEvent) -> Option<Emit>;

    fn render(&mut self, f: &mut Frame, area: Rect);

    /// Fewest lines the default centred area may have
    fn min_height(&self) -> u16 {
        0
    }

    /// Area of `screen` this overlay wants, or `None` to use the registry's
    /// centred default
    fn area(&self, _screen: Rect) -> Option<Rect> {
        None
    }
}
