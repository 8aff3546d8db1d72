//! Store: the document plus its bus, bound together.
//!
//! Every mutation goes through here. The pattern is strict: borrow the
//! document, apply the mutation, collect the returned events, release the
//! borrow, then publish. Handlers therefore always run against a
//! released, fully consistent document — a handler may immediately query
//! or even mutate the store again without a borrow panic.

use crate::document::{Emitted, FormDocument};
use crate::events::{Event, EventBus};
use crate::id::ComponentId;
use crate::io::FormData;
use crate::model::{Component, PropPatch};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub struct FormStore {
    doc: RefCell<FormDocument>,
    bus: Rc<EventBus>,
}

impl FormStore {
    pub fn new(bus: Rc<EventBus>) -> Rc<Self> {
        Rc::new(Self {
            doc: RefCell::new(FormDocument::new()),
            bus,
        })
    }

    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    /// Read-only view of the document. Do not hold this across a
    /// mutation call.
    pub fn document(&self) -> Ref<'_, FormDocument> {
        self.doc.borrow()
    }

    fn publish_all(&self, events: Emitted) {
        for event in &events {
            self.bus.publish(event);
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    pub fn add_component(&self, component: Component, index: Option<usize>) {
        let events = self.doc.borrow_mut().add_component(component, index);
        self.publish_all(events);
    }

    pub fn update_component(&self, id: ComponentId, patches: &[PropPatch]) {
        let events = self.doc.borrow_mut().update_component(id, patches);
        self.publish_all(events);
    }

    pub fn remove_component(&self, id: ComponentId) -> Option<Component> {
        let (removed, events) = self.doc.borrow_mut().remove_component(id);
        self.publish_all(events);
        removed
    }

    pub fn select_component(&self, id: ComponentId) {
        let events = self.doc.borrow_mut().select_component(id);
        self.publish_all(events);
    }

    pub fn deselect(&self) {
        let events = self.doc.borrow_mut().deselect();
        self.publish_all(events);
    }

    pub fn move_component(&self, id: ComponentId, new_index: usize) {
        let events = self.doc.borrow_mut().move_component(id, new_index);
        self.publish_all(events);
    }

    pub fn load(&self, data: FormData) {
        log::debug!(
            "loading form {} ({} components)",
            data.form_id,
            data.components.len()
        );
        let events = self.doc.borrow_mut().load(data);
        self.publish_all(events);
    }

    pub fn clear(&self) {
        log::debug!("clearing form");
        let events = self.doc.borrow_mut().clear();
        self.publish_all(events);
    }

    // ─── Convenience queries (cloned, no borrow to hold) ─────────────────

    pub fn form_data(&self) -> FormData {
        self.doc.borrow().form_data()
    }

    pub fn find(&self, id: ComponentId) -> Option<Component> {
        self.doc.borrow().find(id).cloned()
    }

    pub fn selected_component(&self) -> Option<Component> {
        self.doc.borrow().selected_component().cloned()
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        self.doc.borrow().selected_id()
    }

    pub fn len(&self) -> usize {
        self.doc.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.borrow().is_empty()
    }

    /// Publish an event that is not a document mutation (e.g. the palette
    /// announcing `ComponentAdded` after a drop).
    pub fn announce(&self, event: &Event) {
        self.bus.publish(event);
    }
}
