//! Hit testing: point → element lookup.
//!
//! Walks the canvas in reverse insertion order (last painted = topmost)
//! against the host-measured element bounds.

use pb_core::{Canvas, ElementId, Layout, Point};

/// Find the topmost element at `at`.
/// Returns `None` if no element is hit (bare canvas).
pub fn hit_test(canvas: &Canvas, layout: &Layout, at: Point) -> Option<ElementId> {
    canvas
        .elements()
        .iter()
        .rev()
        .find(|element| {
            let b = layout.bounds(element);
            at.x >= b.x0 && at.x <= b.x1 && at.y >= b.y0 && at.y <= b.y1
        })
        .map(|element| element.id)
}
