//! Hit testing and drop-position geometry.
//!
//! The host reports where each rendered wrapper landed on screen
//! (document order, one [`ItemBounds`] per component); pointer positions
//! are resolved against those rectangles. The midpoint scan in
//! [`insertion_point`] is shared by reorder drags and palette drops so
//! both gestures agree on where an indicator — and the eventual insert —
//! goes.

use fb_core::ComponentId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Vertical midpoint, the pivot of the insertion scan.
    pub fn v_mid(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Screen bounds of one rendered component wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub id: ComponentId,
    pub rect: Rect,
}

/// Topmost component at (px, py). Later items paint over earlier ones,
/// so the walk runs back-to-front.
pub fn hit_test(items: &[ItemBounds], px: f32, py: f32) -> Option<ComponentId> {
    items
        .iter()
        .rev()
        .find(|item| item.rect.contains(px, py))
        .map(|item| item.id)
}

/// Where a dragged item would land if released at `pointer_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertPoint {
    /// Insert immediately before this component.
    Before(ComponentId),
    /// Insert immediately after this component (pointer is past every
    /// midpoint).
    After(ComponentId),
    /// The canvas is empty.
    End,
}

/// Midpoint scan: the first wrapper whose vertical midpoint lies below
/// the pointer is the one we insert before.
pub fn insertion_point(items: &[ItemBounds], pointer_y: f32) -> InsertPoint {
    for item in items {
        if pointer_y < item.rect.v_mid() {
            return InsertPoint::Before(item.id);
        }
    }
    match items.last() {
        Some(last) => InsertPoint::After(last.id),
        None => InsertPoint::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stack(heights: &[f32]) -> Vec<ItemBounds> {
        let mut y = 0.0;
        heights
            .iter()
            .enumerate()
            .map(|(i, &h)| {
                let item = ItemBounds {
                    id: ComponentId::intern(&format!("comp-row{i}")),
                    rect: Rect::new(0.0, y, 600.0, h),
                };
                y += h;
                item
            })
            .collect()
    }

    #[test]
    fn hit_test_picks_topmost_on_overlap() {
        let mut items = stack(&[80.0, 80.0]);
        // Second wrapper overlaps the first (e.g. during a drag preview).
        items[1].rect = Rect::new(0.0, 40.0, 600.0, 80.0);

        assert_eq!(hit_test(&items, 10.0, 60.0), Some(items[1].id));
        assert_eq!(hit_test(&items, 10.0, 10.0), Some(items[0].id));
        assert_eq!(hit_test(&items, 10.0, 500.0), None);
    }

    #[test]
    fn insertion_scan_uses_midpoints() {
        let items = stack(&[100.0, 100.0, 100.0]);

        // Above the first midpoint (y = 50).
        assert_eq!(insertion_point(&items, 20.0), InsertPoint::Before(items[0].id));
        // Between first and second midpoints.
        assert_eq!(insertion_point(&items, 120.0), InsertPoint::Before(items[1].id));
        // Past every midpoint.
        assert_eq!(insertion_point(&items, 290.0), InsertPoint::After(items[2].id));
    }

    #[test]
    fn empty_canvas_inserts_at_end() {
        assert_eq!(insertion_point(&[], 50.0), InsertPoint::End);
    }

    #[test]
    fn exact_midpoint_goes_after() {
        let items = stack(&[100.0]);
        assert_eq!(insertion_point(&items, 50.0), InsertPoint::After(items[0].id));
    }
}
