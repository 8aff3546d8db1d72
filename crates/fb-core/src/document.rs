//! The form document — single source of truth for every surface.
//!
//! Mutation methods are pure with respect to notification: they mutate
//! the document and *return* the events to publish, in order. The
//! [`FormStore`](crate::store::FormStore) applies a mutation, releases its
//! borrow, then publishes — so a handler reacting to the notification
//! always observes a fully applied, consistent document.
//!
//! Id-keyed operations on unknown ids are silent no-ops (and return an
//! empty event list), which makes UI retries idempotent.

use crate::id::{ComponentId, FormId};
use crate::io::FormData;
use crate::model::{Component, PropPatch};
use smallvec::{SmallVec, smallvec};

use crate::events::Event;

pub const DEFAULT_FORM_NAME: &str = "Untitled Form";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Events produced by one document mutation.
pub type Emitted = SmallVec<[Event; 2]>;

#[derive(Debug, Clone, PartialEq)]
pub struct FormDocument {
    pub form_id: FormId,
    pub form_name: String,
    pub version: String,
    components: Vec<Component>,
    selected: Option<ComponentId>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self {
            form_id: FormId::generate(),
            form_name: DEFAULT_FORM_NAME.into(),
            version: DEFAULT_VERSION.into(),
            components: Vec::new(),
            selected: None,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn find(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn index_of(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn selected_component(&self) -> Option<&Component> {
        self.selected.and_then(|id| self.find(id))
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Insert at `index` when it lies within `[0, len]`, else append.
    pub fn add_component(&mut self, component: Component, index: Option<usize>) -> Emitted {
        match index {
            Some(i) if i <= self.components.len() => self.components.insert(i, component),
            _ => self.components.push(component),
        }
        smallvec![Event::StateChanged]
    }

    /// Apply patches to the matching component. Unknown id: no-op.
    pub fn update_component(&mut self, id: ComponentId, patches: &[PropPatch]) -> Emitted {
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            return SmallVec::new();
        };
        component.apply_all(patches);
        let updated = component.clone();
        smallvec![Event::StateChanged, Event::ComponentUpdated(updated)]
    }

    /// Remove the first match. Clears (and announces) selection when the
    /// removed component was selected. Unknown id: no-op.
    pub fn remove_component(&mut self, id: ComponentId) -> (Option<Component>, Emitted) {
        let Some(index) = self.index_of(id) else {
            return (None, SmallVec::new());
        };
        let removed = self.components.remove(index);

        let mut events = SmallVec::new();
        if self.selected == Some(id) {
            self.selected = None;
            events.push(Event::ComponentDeselected);
        }
        events.push(Event::StateChanged);
        (Some(removed), events)
    }

    /// Select `id`. The notification carries the resolved component;
    /// a stale id still sets the selection but resolves to `None`.
    pub fn select_component(&mut self, id: ComponentId) -> Emitted {
        self.selected = Some(id);
        smallvec![Event::ComponentSelected(self.find(id).cloned())]
    }

    pub fn deselect(&mut self) -> Emitted {
        self.selected = None;
        smallvec![Event::ComponentDeselected]
    }

    /// Remove then reinsert at `new_index`; an out-of-range index lands at
    /// the end. Unknown id: no-op.
    pub fn move_component(&mut self, id: ComponentId, new_index: usize) -> Emitted {
        let Some(current) = self.index_of(id) else {
            return SmallVec::new();
        };
        let component = self.components.remove(current);
        let target = new_index.min(self.components.len());
        self.components.insert(target, component);
        smallvec![Event::StateChanged]
    }

    /// Deep snapshot for serialization. The model never stores transient
    /// render data, so the snapshot is clean by construction.
    pub fn form_data(&self) -> FormData {
        FormData {
            form_id: self.form_id,
            form_name: self.form_name.clone(),
            version: self.version.clone(),
            components: self.components.clone(),
        }
    }

    /// Replace the document wholesale from validated import data.
    pub fn load(&mut self, data: FormData) -> Emitted {
        self.form_id = data.form_id;
        self.form_name = data.form_name;
        self.version = data.version;
        self.components = data.components;
        self.selected = None;
        smallvec![Event::StateLoaded, Event::StateChanged]
    }

    /// Discard every component and mint a new form id.
    pub fn clear(&mut self) -> Emitted {
        self.components.clear();
        self.selected = None;
        self.form_id = FormId::generate();
        smallvec![Event::StateCleared(self.form_id), Event::StateChanged]
    }
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}
