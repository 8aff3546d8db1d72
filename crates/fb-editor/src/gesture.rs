//! Gesture sessions and the shared arbiter.
//!
//! Reorder, resize, and palette drags are mutually exclusive: all three
//! consult one [`GestureArbiter`] before starting. A second gesture
//! arriving while another is active is refused at the source, so the
//! controllers never have to untangle interleaved sessions.

use crate::input::Edge;
use fb_core::ComponentId;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct ReorderSession {
    pub id: ComponentId,
    pub start_y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReorderGesture {
    #[default]
    Idle,
    Active(ReorderSession),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub id: ComponentId,
    pub edge: Edge,
    pub start_x: f32,
    pub start_width: f32,
    pub container_width: f32,
    /// Class applied to the visual item so far; committed on finish.
    pub current_class: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizeGesture {
    #[default]
    Idle,
    Active(ResizeSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Reorder,
    Resize,
    PaletteDrag,
}

/// One per editor. Tracks which gesture currently owns the pointer.
#[derive(Default)]
pub struct GestureArbiter {
    active: Cell<Option<GestureKind>>,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the pointer for `kind`. Re-claiming the already active kind
    /// is allowed (a palette drag fires repeated drag-over events).
    pub fn try_begin(&self, kind: GestureKind) -> bool {
        match self.active.get() {
            None => {
                self.active.set(Some(kind));
                true
            }
            Some(current) if current == kind => true,
            Some(current) => {
                log::debug!("refused {kind:?} while {current:?} is active");
                false
            }
        }
    }

    /// Release the pointer. Ending a gesture that is not active is a
    /// no-op (drag-leave can race drop).
    pub fn end(&self, kind: GestureKind) {
        if self.active.get() == Some(kind) {
            self.active.set(None);
        }
    }

    pub fn active(&self) -> Option<GestureKind> {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gestures_are_mutually_exclusive() {
        let arbiter = GestureArbiter::new();
        assert!(arbiter.try_begin(GestureKind::Resize));
        assert!(!arbiter.try_begin(GestureKind::Reorder));
        assert!(!arbiter.try_begin(GestureKind::PaletteDrag));

        arbiter.end(GestureKind::Resize);
        assert!(arbiter.try_begin(GestureKind::Reorder));
    }

    #[test]
    fn reclaiming_the_active_kind_is_allowed() {
        let arbiter = GestureArbiter::new();
        assert!(arbiter.try_begin(GestureKind::PaletteDrag));
        assert!(arbiter.try_begin(GestureKind::PaletteDrag));
    }

    #[test]
    fn ending_an_inactive_kind_changes_nothing() {
        let arbiter = GestureArbiter::new();
        arbiter.try_begin(GestureKind::Reorder);
        arbiter.end(GestureKind::Resize);
        assert_eq!(arbiter.active(), Some(GestureKind::Reorder));
    }
}
