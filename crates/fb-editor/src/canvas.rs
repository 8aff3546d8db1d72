//! Canvas controller: the editable surface.
//!
//! The visual item list is rebuilt from the document on every render —
//! never derived from its own previous output — so the canvas cannot
//! drift from the model. Remote options resolve sequentially during the
//! pass (document order, one component at a time); a fetch failure is
//! logged and the component falls back to its manual options.

use crate::gesture::{GestureArbiter, GestureKind, ReorderGesture, ReorderSession};
use crate::input::HitTarget;
use fb_core::events::EventKind;
use fb_core::{ComponentId, FormStore};
use fb_remote::{OptionSource, OptionsRequest, RequestLedger};
use fb_render::preview::ResolvedOptions;
use fb_render::{Element, InsertPoint, ItemBounds, Rect, insertion_point, render_canvas_item};
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

/// One rendered component: its markup and where the host laid it out.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasItem {
    pub id: ComponentId,
    pub element: Element,
    pub rect: Rect,
}

pub struct CanvasController {
    store: Rc<FormStore>,
    source: Rc<dyn OptionSource>,
    arbiter: Rc<GestureArbiter>,
    ledger: RequestLedger,
    items: RefCell<Vec<CanvasItem>>,
    /// Successfully fetched options, kept across renders so a transient
    /// failure does not blank a previously resolved list.
    resolved: RefCell<ResolvedOptions>,
    placeholder: Cell<bool>,
    dirty: Cell<bool>,
    reorder: RefCell<ReorderGesture>,
}

impl CanvasController {
    pub fn new(
        store: Rc<FormStore>,
        source: Rc<dyn OptionSource>,
        arbiter: Rc<GestureArbiter>,
    ) -> Rc<Self> {
        Rc::new(Self {
            store,
            source,
            arbiter,
            ledger: RequestLedger::new(),
            items: RefCell::new(Vec::new()),
            resolved: RefCell::new(ResolvedOptions::new()),
            placeholder: Cell::new(true),
            dirty: Cell::new(true),
            reorder: RefCell::new(ReorderGesture::Idle),
        })
    }

    /// Subscribe to the bus. Document-shape notifications mark the canvas
    /// dirty (the host awaits [`CanvasController::render`] next tick);
    /// selection notifications restyle in place without a render pass.
    pub fn connect(self: &Rc<Self>) {
        let bus = self.store.bus().clone();
        for kind in [
            EventKind::StateChanged,
            EventKind::StateLoaded,
            EventKind::ComponentUpdated,
        ] {
            let weak = Rc::downgrade(self);
            bus.subscribe(kind, move |_| {
                if let Some(canvas) = weak.upgrade() {
                    canvas.dirty.set(true);
                }
            });
        }
        {
            let weak = Rc::downgrade(self);
            bus.subscribe(EventKind::StateCleared, move |_| {
                if let Some(canvas) = weak.upgrade() {
                    canvas.ledger.reset();
                    canvas.resolved.borrow_mut().clear();
                    canvas.dirty.set(true);
                }
            });
        }
        for kind in [EventKind::ComponentSelected, EventKind::ComponentDeselected] {
            let weak = Rc::downgrade(self);
            bus.subscribe(kind, move |_| {
                if let Some(canvas) = weak.upgrade() {
                    canvas.refresh_highlight();
                }
            });
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder.get()
    }

    pub fn items(&self) -> Ref<'_, Vec<CanvasItem>> {
        self.items.borrow()
    }

    /// Rebuild the visual list from the document. Async because choice
    /// components with a remote source resolve their options first.
    pub async fn render(&self) {
        self.dirty.set(false);
        let components = self.store.document().components().to_vec();

        if components.is_empty() {
            self.items.borrow_mut().clear();
            self.placeholder.set(true);
            return;
        }
        self.placeholder.set(false);

        for component in &components {
            let Some(choice) = component.props.choice() else {
                continue;
            };
            if !choice.wants_remote_options() {
                continue;
            }
            let ticket = self.ledger.begin(component.id);
            let request = OptionsRequest::from(choice);
            let outcome = self.source.fetch_options(&request).await;
            if !self.ledger.is_current(&ticket) {
                log::debug!("discarding superseded options for {}", component.id);
                continue;
            }
            match outcome {
                Ok(options) => {
                    self.resolved.borrow_mut().insert(component.id, options);
                }
                Err(e) => {
                    log::warn!("options fetch for {} failed: {e}", component.id);
                }
            }
        }

        let selected = self.store.selected_id();
        let resolved = self.resolved.borrow();
        let old_items = self.items.borrow();
        let items: Vec<CanvasItem> = components
            .iter()
            .map(|component| {
                let options = resolved.get(&component.id).map(Vec::as_slice);
                CanvasItem {
                    id: component.id,
                    element: render_canvas_item(component, options, selected == Some(component.id)),
                    // Keep the last measured rect until the host re-measures.
                    rect: old_items
                        .iter()
                        .find(|item| item.id == component.id)
                        .map_or(Rect::default(), |item| item.rect),
                }
            })
            .collect();
        drop(old_items);
        *self.items.borrow_mut() = items;
    }

    /// Restyle the selection marker without re-fetching or re-rendering
    /// the whole canvas.
    fn refresh_highlight(&self) {
        let selected = self.store.selected_id();
        let resolved = self.resolved.borrow();
        let mut items = self.items.borrow_mut();
        for item in items.iter_mut() {
            let Some(component) = self.store.find(item.id) else {
                continue;
            };
            let options = resolved.get(&item.id).map(Vec::as_slice);
            item.element =
                render_canvas_item(&component, options, selected == Some(item.id));
        }
    }

    /// Host-measured wrapper rectangles, in item order.
    pub fn set_bounds(&self, rects: &[Rect]) {
        let mut items = self.items.borrow_mut();
        for (item, &rect) in items.iter_mut().zip(rects) {
            item.rect = rect;
        }
    }

    pub fn item_bounds(&self) -> Vec<ItemBounds> {
        self.items
            .borrow()
            .iter()
            .map(|item| ItemBounds {
                id: item.id,
                rect: item.rect,
            })
            .collect()
    }

    // ─── Selection protocol ──────────────────────────────────────────────

    /// A completed click (no drag started). Delete wins over selection,
    /// a wrapper hit selects, bare canvas deselects.
    pub fn click(&self, target: HitTarget) {
        match target {
            HitTarget::DeleteButton(id) => {
                self.store.remove_component(id);
            }
            HitTarget::Component(id) | HitTarget::DragHandle(id) => {
                self.store.select_component(id);
            }
            HitTarget::Empty => self.store.deselect(),
            // The resize controller owns handle interactions.
            HitTarget::ResizeHandle(..) => {}
        }
    }

    // ─── Reorder protocol ────────────────────────────────────────────────

    /// Start dragging a wrapper. Refused while another gesture owns the
    /// pointer.
    pub fn begin_reorder(&self, id: ComponentId, start_y: f32) -> bool {
        if self.store.document().index_of(id).is_none() {
            return false;
        }
        if matches!(&*self.reorder.borrow(), ReorderGesture::Active(_)) {
            return false;
        }
        if !self.arbiter.try_begin(GestureKind::Reorder) {
            return false;
        }
        log::debug!("reorder start: {id}");
        *self.reorder.borrow_mut() = ReorderGesture::Active(ReorderSession { id, start_y });
        true
    }

    /// Optimistic move: relocate the dragged item in the visual list only;
    /// the model is untouched until the pointer is released.
    pub fn reorder_move(&self, pointer_y: f32) {
        let dragged = match &*self.reorder.borrow() {
            ReorderGesture::Active(session) => session.id,
            ReorderGesture::Idle => return,
        };

        let mut items = self.items.borrow_mut();
        let Some(current) = items.iter().position(|item| item.id == dragged) else {
            return;
        };
        let item = items.remove(current);

        let others: Vec<ItemBounds> = items
            .iter()
            .map(|i| ItemBounds { id: i.id, rect: i.rect })
            .collect();
        let target = match insertion_point(&others, pointer_y) {
            InsertPoint::Before(id) => items.iter().position(|i| i.id == id).unwrap_or(items.len()),
            InsertPoint::After(_) | InsertPoint::End => items.len(),
        };
        items.insert(target, item);
    }

    /// Commit the drag: the dragged item's position in the visual list
    /// becomes its new model index. Returns the committed index, `None`
    /// when no session was active.
    pub fn finish_reorder(&self) -> Option<usize> {
        let session = match std::mem::take(&mut *self.reorder.borrow_mut()) {
            ReorderGesture::Active(session) => session,
            ReorderGesture::Idle => return None,
        };
        self.arbiter.end(GestureKind::Reorder);

        let index = self
            .items
            .borrow()
            .iter()
            .position(|item| item.id == session.id)?;
        self.store.move_component(session.id, index);
        log::debug!("reorder commit: {} -> {index}", session.id);
        Some(index)
    }
}
