//! Resize controller: horizontal handle drags quantized to the 12-column
//! grid.
//!
//! During the drag only the visual class and the floating width label
//! move; the model sees exactly one `ColumnClass` patch, on release.

use crate::gesture::{GestureArbiter, GestureKind, ResizeGesture, ResizeSession};
use crate::input::Edge;
use fb_core::model::PropPatch;
use fb_core::{ComponentId, FormStore};
use std::cell::RefCell;
use std::rc::Rc;

/// Grid width → canonical class. Widths 3, 4, 6, 8 and 9 use the
/// md-qualified form, everything else the plain one; this is the single
/// table both the drag preview and the committed value come from.
pub fn column_class_for(width: u32) -> &'static str {
    match width.clamp(1, 12) {
        1 => "col-1",
        2 => "col-2",
        3 => "col-md-3",
        4 => "col-md-4",
        5 => "col-5",
        6 => "col-md-6",
        7 => "col-7",
        8 => "col-md-8",
        9 => "col-md-9",
        10 => "col-10",
        11 => "col-11",
        _ => "col-12",
    }
}

/// Human label for the floating width indicator. Named fractions for the
/// common widths, the raw class otherwise.
pub fn width_label(class: &str) -> String {
    if class.contains("col-12") {
        "Full Width (12/12)".into()
    } else if class.contains('6') {
        "Half Width (6/12)".into()
    } else if class.contains('4') {
        "One Third (4/12)".into()
    } else if class.contains('3') {
        "One Quarter (3/12)".into()
    } else if class.contains('8') {
        "Two Thirds (8/12)".into()
    } else if class.contains('9') {
        "Three Quarters (9/12)".into()
    } else {
        class.into()
    }
}

pub struct ResizeController {
    store: Rc<FormStore>,
    arbiter: Rc<GestureArbiter>,
    gesture: RefCell<ResizeGesture>,
}

impl ResizeController {
    pub fn new(store: Rc<FormStore>, arbiter: Rc<GestureArbiter>) -> Self {
        Self {
            store,
            arbiter,
            gesture: RefCell::new(ResizeGesture::Idle),
        }
    }

    /// Grab a handle. `item_width` and `container_width` are the host's
    /// pixel measurements at gesture start.
    pub fn start(
        &self,
        id: ComponentId,
        edge: Edge,
        pointer_x: f32,
        item_width: f32,
        container_width: f32,
    ) -> bool {
        let Some(component) = self.store.find(id) else {
            return false;
        };
        if matches!(&*self.gesture.borrow(), ResizeGesture::Active(_)) {
            return false;
        }
        if container_width <= 0.0 || !self.arbiter.try_begin(GestureKind::Resize) {
            return false;
        }
        log::debug!("resize start: {id} ({edge:?})");
        *self.gesture.borrow_mut() = ResizeGesture::Active(ResizeSession {
            id,
            edge,
            start_x: pointer_x,
            start_width: item_width,
            container_width,
            current_class: component.props.column_class().to_string(),
        });
        true
    }

    /// Recompute the quantized class for the current pointer position.
    /// Returns `(class, label)` for the host to apply visually; the model
    /// is not written.
    pub fn update(&self, pointer_x: f32) -> Option<(String, String)> {
        let mut gesture = self.gesture.borrow_mut();
        let ResizeGesture::Active(session) = &mut *gesture else {
            return None;
        };

        let delta = pointer_x - session.start_x;
        let new_width_px = match session.edge {
            Edge::Right => session.start_width + delta,
            Edge::Left => session.start_width - delta,
        };
        let fraction = new_width_px / session.container_width;
        let columns = (fraction * 12.0).round().clamp(1.0, 12.0) as u32;

        let class = column_class_for(columns);
        session.current_class = class.to_string();
        Some((class.to_string(), width_label(class)))
    }

    /// The class currently previewed, while a session is active.
    pub fn current_class(&self) -> Option<String> {
        match &*self.gesture.borrow() {
            ResizeGesture::Active(session) => Some(session.current_class.clone()),
            ResizeGesture::Idle => None,
        }
    }

    /// Release: commit the previewed class as a single model update and
    /// clear the session.
    pub fn finish(&self) {
        let session = match std::mem::take(&mut *self.gesture.borrow_mut()) {
            ResizeGesture::Active(session) => session,
            ResizeGesture::Idle => return,
        };
        self.arbiter.end(GestureKind::Resize);
        log::debug!("resize commit: {} -> {}", session.id, session.current_class);
        self.store
            .update_component(session.id, &[PropPatch::ColumnClass(session.current_class)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::store_with;
    use fb_core::ComponentKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_is_canonical() {
        assert_eq!(column_class_for(3), "col-md-3");
        assert_eq!(column_class_for(5), "col-5");
        assert_eq!(column_class_for(6), "col-md-6");
        assert_eq!(column_class_for(12), "col-12");
        // Clamped outside the grid.
        assert_eq!(column_class_for(0), "col-1");
        assert_eq!(column_class_for(40), "col-12");
    }

    #[test]
    fn labels_name_the_common_fractions() {
        assert_eq!(width_label("col-12"), "Full Width (12/12)");
        assert_eq!(width_label("col-md-6"), "Half Width (6/12)");
        assert_eq!(width_label("col-md-9"), "Three Quarters (9/12)");
        assert_eq!(width_label("col-7"), "col-7");
    }

    #[test]
    fn drag_right_handle_to_half_width() {
        let (store, ids) = store_with(&[ComponentKind::Text]);
        let resize = ResizeController::new(store.clone(), Rc::new(GestureArbiter::new()));

        // Full-width item in a 1200px container, dragged 600px inward.
        assert!(resize.start(ids[0], Edge::Right, 1200.0, 1200.0, 1200.0));
        let (class, label) = resize.update(600.0).unwrap();
        assert_eq!(class, "col-md-6");
        assert_eq!(label, "Half Width (6/12)");

        // Mid-drag the model still holds the original class.
        assert_eq!(store.find(ids[0]).unwrap().props.column_class(), "col-12");

        resize.finish();
        assert_eq!(store.find(ids[0]).unwrap().props.column_class(), "col-md-6");
    }

    #[test]
    fn left_handle_inverts_the_delta() {
        let (store, ids) = store_with(&[ComponentKind::Text]);
        let resize = ResizeController::new(store.clone(), Rc::new(GestureArbiter::new()));

        assert!(resize.start(ids[0], Edge::Left, 0.0, 600.0, 1200.0));
        // Moving left grows the item: -300px delta → 900px → 9/12.
        let (class, _) = resize.update(-300.0).unwrap();
        assert_eq!(class, "col-md-9");
    }

    #[test]
    fn width_never_leaves_the_grid() {
        let (store, ids) = store_with(&[ComponentKind::Text]);
        let resize = ResizeController::new(store.clone(), Rc::new(GestureArbiter::new()));

        assert!(resize.start(ids[0], Edge::Right, 600.0, 600.0, 1200.0));
        let (narrow, _) = resize.update(-2000.0).unwrap();
        assert_eq!(narrow, "col-1");
        let (wide, _) = resize.update(5000.0).unwrap();
        assert_eq!(wide, "col-12");
    }

    #[test]
    fn finish_without_update_commits_the_starting_class() {
        let (store, ids) = store_with(&[ComponentKind::Text]);
        let resize = ResizeController::new(store.clone(), Rc::new(GestureArbiter::new()));

        assert!(resize.start(ids[0], Edge::Right, 100.0, 1200.0, 1200.0));
        resize.finish();
        assert_eq!(store.find(ids[0]).unwrap().props.column_class(), "col-12");
    }

    #[test]
    fn second_gesture_refused_while_active() {
        let (store, ids) = store_with(&[ComponentKind::Text, ComponentKind::Email]);
        let arbiter = Rc::new(GestureArbiter::new());
        let resize = ResizeController::new(store.clone(), arbiter.clone());

        assert!(resize.start(ids[0], Edge::Right, 0.0, 600.0, 1200.0));
        assert!(!arbiter.try_begin(GestureKind::Reorder));
        resize.finish();
        assert!(arbiter.try_begin(GestureKind::Reorder));
    }
}
