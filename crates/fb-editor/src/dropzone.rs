//! Drop-zone controller: palette drags onto the canvas.
//!
//! Drag-over positions the indicator via the same midpoint scan the
//! reorder drag uses; drop resolves the palette token through the catalog
//! and inserts at the indicated index. An unknown token never inserts —
//! the drop aborts with a warning and the document stays as it was.

use crate::canvas::CanvasController;
use crate::gesture::{GestureArbiter, GestureKind};
use fb_core::events::Event;
use fb_core::{ComponentKind, FormStore, catalog};
use fb_render::{InsertPoint, insertion_point};
use std::cell::Cell;
use std::rc::Rc;

/// Where the indicator line sits between wrappers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropIndicator {
    Hidden,
    Visible(InsertPoint),
}

pub struct DropZoneController {
    store: Rc<FormStore>,
    canvas: Rc<CanvasController>,
    arbiter: Rc<GestureArbiter>,
    indicator: Cell<DropIndicator>,
}

impl DropZoneController {
    pub fn new(
        store: Rc<FormStore>,
        canvas: Rc<CanvasController>,
        arbiter: Rc<GestureArbiter>,
    ) -> Self {
        Self {
            store,
            canvas,
            arbiter,
            indicator: Cell::new(DropIndicator::Hidden),
        }
    }

    pub fn indicator(&self) -> DropIndicator {
        self.indicator.get()
    }

    /// A palette item is hovering at `pointer_y`. Unrecognized tokens
    /// leave the indicator hidden.
    pub fn drag_over(&self, token: &str, pointer_y: f32) {
        if ComponentKind::parse(token).is_err() {
            self.indicator.set(DropIndicator::Hidden);
            return;
        }
        if !self.arbiter.try_begin(GestureKind::PaletteDrag) {
            return;
        }
        let point = insertion_point(&self.canvas.item_bounds(), pointer_y);
        self.indicator.set(DropIndicator::Visible(point));
    }

    /// Pointer left the canvas boundary.
    pub fn drag_leave(&self) {
        self.indicator.set(DropIndicator::Hidden);
        self.arbiter.end(GestureKind::PaletteDrag);
    }

    /// Release over the canvas: mint a component from the token and
    /// insert it where the indicator pointed.
    pub fn drop(&self, token: &str, pointer_y: f32) {
        self.indicator.set(DropIndicator::Hidden);
        self.arbiter.end(GestureKind::PaletteDrag);

        let component = match catalog::create_from_token(token) {
            Ok(component) => component,
            Err(e) => {
                log::warn!("drop aborted: {e}");
                return;
            }
        };

        let index = match insertion_point(&self.canvas.item_bounds(), pointer_y) {
            InsertPoint::Before(id) => self.store.document().index_of(id),
            InsertPoint::After(id) => self.store.document().index_of(id).map(|i| i + 1),
            InsertPoint::End => None,
        };

        let announcement = Event::ComponentAdded(component.clone());
        self.store.add_component(component, index);
        self.store.announce(&announcement);
    }
}
