//! Pointer input as data.
//!
//! The host shell owns the real DOM/window event stream; it resolves each
//! pointer event against the rendered markup ("nearest wrapper ancestor",
//! handle attributes and so on) and hands the controllers a [`HitTarget`]
//! plus coordinates. Controllers never touch a widget tree.

use fb_core::ComponentId;

/// Which resize handle was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// What sits under the pointer, resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A component wrapper (select on click, reorder on drag).
    Component(ComponentId),
    /// The delete affordance inside a wrapper.
    DeleteButton(ComponentId),
    /// A resize handle on a wrapper edge.
    ResizeHandle(ComponentId, Edge),
    /// The dedicated drag region of a wrapper.
    DragHandle(ComponentId),
    /// Bare canvas.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, target: HitTarget },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
}
