//! The overlay registry: owner of every mounted overlay.

use super::entry::{Attributes, Entry, EventContext, EventHandlers, OverlayId};
use super::OverlayComponent;
use crate::config::UiConfig;
use crate::constants::{DIALOG_DEFAULT_HEIGHT_PERCENT, DIALOG_DEFAULT_WIDTH_PERCENT};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, widgets::Clear, Frame};
use serde_json::Value;
use std::collections::HashMap;

/// An overlay as it was drawn in the last render pass
pub struct RenderedOverlay<'a> {
    pub id: OverlayId,
    pub area: Rect,
    pub component: &'a mut dyn OverlayComponent,
}

/// Owns the mounted overlays and their mount order.
///
/// The registry is constructed once by the application root and passed by
/// reference to whatever code needs to open or close overlays. Entries are
/// keyed by [`OverlayId`]; `order` holds the same ids in mount order, which is
/// also the drawing order (last is topmost).
///
/// Every mutation bumps [`revision`](Self::revision) so the render loop can
/// tell when a redraw is due.
pub struct OverlayRegistry {
    entries: HashMap<OverlayId, Entry>,
    order: Vec<OverlayId>,
    rendered: HashMap<OverlayId, Rect>,
    revision: u64,
    rendered_revision: Option<u64>,
    width_percent: u16,
    height_percent: u16,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::with_default_size(DIALOG_DEFAULT_WIDTH_PERCENT, DIALOG_DEFAULT_HEIGHT_PERCENT)
    }

    /// Create a registry whose overlays default to the given share of the screen
    pub fn with_default_size(width_percent: u16, height_percent: u16) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            rendered: HashMap::new(),
            revision: 0,
            rendered_revision: None,
            width_percent: width_percent.min(100),
            height_percent: height_percent.min(100),
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::with_default_size(config.dialog_width_percent, config.dialog_height_percent)
    }

    /// Mount `component` on top of every other overlay.
    ///
    /// The component receives `attributes` before it is stored. Neither the
    /// attributes nor the handlers are validated.
    pub fn open<C>(&mut self, component: C, attributes: Attributes, handlers: EventHandlers) -> OverlayId
    where
        C: OverlayComponent + 'static,
    {
        self.open_boxed(Box::new(component), attributes, handlers)
    }

    pub fn open_boxed(
        &mut self,
        mut component: Box<dyn OverlayComponent>,
        attributes: Attributes,
        handlers: EventHandlers,
    ) -> OverlayId {
        let id = OverlayId::generate();
        component.mount(&attributes);

        log::debug!(
            "Overlay: opened '{}' ({}) with {} attribute(s), {} handler(s)",
            component.name(),
            id,
            attributes.len(),
            handlers.len()
        );

        self.entries.insert(
            id,
            Entry {
                id,
                component,
                attributes,
                handlers,
            },
        );
        self.order.push(id);
        self.touch();
        id
    }

    /// Unmount the overlay with `id`.
    ///
    /// Returns `false` and leaves the registry untouched when no such overlay
    /// is mounted, which makes closing twice harmless.
    pub fn close(&mut self, id: OverlayId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.order.retain(|mounted| *mounted != id);
                self.rendered.remove(&id);
                self.touch();
                log::debug!("Overlay: closed '{}' ({})", entry.component.name(), id);
                true
            }
            None => {
                log::debug!("Overlay: ignoring close of unknown overlay {}", id);
                false
            }
        }
    }

    /// Unmount every overlay, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.order.len();
        if count > 0 {
            self.entries.clear();
            self.order.clear();
            self.rendered.clear();
            self.touch();
            log::debug!("Overlay: cleared {} overlay(s)", count);
        }
        count
    }

    /// Run `callback` against the overlay with `id` as drawn by the last render.
    ///
    /// The callback is only invoked when the overlay is mounted and has been
    /// rendered at least once; otherwise this is a no-op returning `false`.
    pub fn lookup<F>(&mut self, id: OverlayId, callback: F) -> bool
    where
        F: FnOnce(RenderedOverlay<'_>),
    {
        let Some(area) = self.rendered.get(&id).copied() else {
            return false;
        };
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };

        callback(RenderedOverlay {
            id,
            area,
            component: entry.component.as_mut(),
        });
        true
    }

    /// Run the handler registered for `event` on the overlay with `id`.
    ///
    /// Closes requested through the [`EventContext`] are applied after the
    /// handler returns. Returns `false` when the overlay or the handler does
    /// not exist.
    pub fn dispatch(&mut self, id: OverlayId, event: &str, payload: Option<Value>) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            log::debug!("Overlay: event '{}' for unknown overlay {}", event, id);
            return false;
        };
        let Some(handler) = entry.handlers.get_mut(event) else {
            log::debug!(
                "Overlay: '{}' ({}) has no handler for event '{}'",
                entry.component.name(),
                id,
                event
            );
            return false;
        };

        let mut ctx = EventContext::new(id);
        handler(&mut ctx, payload);

        for target in ctx.into_pending_closes() {
            self.close(target);
        }
        true
    }

    /// Route a key press to the topmost overlay.
    ///
    /// Overlays are modal: while any is mounted the key is consumed by the
    /// topmost one, even when it emits nothing. Returns `false` when no overlay
    /// is mounted.
    pub fn handle_key_events(&mut self, key: KeyEvent) -> bool {
        let Some(top) = self.top() else {
            return false;
        };
        let emitted = match self.entries.get_mut(&top) {
            Some(entry) => entry.component.handle_key_events(key),
            None => return false,
        };

        // The component may have changed its own state
        self.touch();

        if let Some(emit) = emitted {
            self.dispatch(top, &emit.event, emit.payload);
        }
        true
    }

    /// Draw every overlay in mount order and refresh the lookup cache
    pub fn render(&mut self, f: &mut Frame, screen: Rect) {
        self.rendered.clear();
        let (width_percent, height_percent) = (self.width_percent, self.height_percent);

        for id in &self.order {
            let Some(entry) = self.entries.get_mut(id) else {
                continue;
            };
            let component = &entry.component;
            let area = component
                .area(screen)
                .unwrap_or_else(|| {
                    LayoutManager::dialog_rect(width_percent, height_percent, component.min_height(), screen)
                })
                .intersection(screen);

            f.render_widget(Clear, area);
            entry.component.render(f, area);
            self.rendered.insert(*id, area);
        }

        self.rendered_revision = Some(self.revision);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Mounted overlay ids in mount order
    pub fn ids(&self) -> impl Iterator<Item = OverlayId> + '_ {
        self.order.iter().copied()
    }

    /// The topmost (most recently opened) overlay
    pub fn top(&self) -> Option<OverlayId> {
        self.order.last().copied()
    }

    pub fn get(&self, id: OverlayId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Counter bumped on every change to the mounted overlays
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether something changed since the last [`render`](Self::render)
    pub fn needs_render(&self) -> bool {
        self.rendered_revision != Some(self.revision)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
