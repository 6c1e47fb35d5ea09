use super::OverlayComponent;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifier of a mounted overlay, returned by [`OverlayRegistry::open`].
///
/// Every call to `open` produces a fresh id, even when the same kind of
/// component is opened twice, and ids are never reused.
///
/// [`OverlayRegistry::open`]: super::OverlayRegistry::open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Props handed to a component when it is mounted
pub type Attributes = HashMap<String, Value>;

/// Callback run when a mounted component emits the event it is registered for
pub type EventHandler = Box<dyn FnMut(&mut EventContext, Option<Value>) + Send>;

/// Named event emitted by a component in response to user input
#[derive(Debug, Clone, PartialEq)]
pub struct Emit {
    pub event: String,
    pub payload: Option<Value>,
}

impl Emit {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            payload: None,
        }
    }

    pub fn with_payload(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: event.into(),
            payload: Some(payload),
        }
    }
}

/// Event name to handler mapping attached to an overlay
#[derive(Default)]
pub struct EventHandlers {
    handlers: HashMap<String, EventHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, replacing any previous one
    pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&mut EventContext, Option<Value>) + Send + 'static,
    {
        self.handlers.insert(event.into(), Box::new(handler));
        self
    }

    pub fn contains(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub(crate) fn get_mut(&mut self, event: &str) -> Option<&mut EventHandler> {
        self.handlers.get_mut(event)
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("EventHandlers").field("events", &names).finish()
    }
}

/// Handle passed to an [`EventHandler`] while it runs.
///
/// Closing is deferred: the registry applies the requested closes once the
/// handler returns, in the order they were requested.
#[derive(Debug)]
pub struct EventContext {
    id: OverlayId,
    pending_closes: Vec<OverlayId>,
}

impl EventContext {
    pub(crate) fn new(id: OverlayId) -> Self {
        Self {
            id,
            pending_closes: Vec::new(),
        }
    }

    /// Id of the overlay whose handler is running
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Close the overlay whose handler is running
    pub fn close(&mut self) {
        self.pending_closes.push(self.id);
    }

    /// Close another overlay
    pub fn close_overlay(&mut self, id: OverlayId) {
        self.pending_closes.push(id);
    }

    pub(crate) fn into_pending_closes(self) -> Vec<OverlayId> {
        self.pending_closes
    }
}

/// One mounted overlay
pub struct Entry {
    pub(crate) id: OverlayId,
    pub(crate) component: Box<dyn OverlayComponent>,
    pub(crate) attributes: Attributes,
    pub(crate) handlers: EventHandlers,
}

impl Entry {
    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("name", &self.component.name())
            .field("attributes", &self.attributes)
            .field("handlers", &self.handlers)
            .finish()
    }
}
