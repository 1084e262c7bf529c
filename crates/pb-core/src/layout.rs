//! Canvas and element measurements.
//!
//! Layout is done by the host; the engine only keeps the numbers it needs
//! for hit testing and drag clamping. An element that was never measured
//! is treated as zero-sized.

use crate::id::ElementId;
use crate::model::PlacedElement;
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;

/// The canvas (viewport) dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Host-reported sizes, keyed by element.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub viewport: Viewport,
    sizes: HashMap<ElementId, Size>,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sizes: HashMap::new(),
        }
    }

    pub fn set_size(&mut self, id: ElementId, size: Size) {
        self.sizes.insert(id, size);
    }

    pub fn size_of(&self, id: ElementId) -> Size {
        self.sizes.get(&id).copied().unwrap_or(Size::ZERO)
    }

    /// Drop a measurement once its element is gone.
    pub fn forget(&mut self, id: ElementId) {
        self.sizes.remove(&id);
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
    }

    /// Canvas-relative bounding box of an element.
    pub fn bounds(&self, element: &PlacedElement) -> Rect {
        Rect::from_origin_size(element.position, self.size_of(element.id))
    }

    /// Clamp a top-left position so a box of `size` stays inside the canvas.
    ///
    /// The upper bound is applied first, so a box larger than the canvas
    /// pins to the origin.
    pub fn clamp_origin(&self, origin: Point, size: Size) -> Point {
        let max_x = self.viewport.width - size.width;
        let max_y = self.viewport.height - size.height;
        Point::new(origin.x.min(max_x).max(0.0), origin.y.min(max_y).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_box_inside() {
        let layout = Layout::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        let size = Size::new(100.0, 50.0);
        assert_eq!(layout.clamp_origin(Point::new(-20.0, 10.0), size), Point::new(0.0, 10.0));
        assert_eq!(layout.clamp_origin(Point::new(350.0, 290.0), size), Point::new(300.0, 250.0));
        assert_eq!(layout.clamp_origin(Point::new(120.0, 80.0), size), Point::new(120.0, 80.0));
    }

    #[test]
    fn oversized_box_pins_to_origin() {
        let layout = Layout::new(Viewport {
            width: 100.0,
            height: 100.0,
        });
        let size = Size::new(250.0, 250.0);
        assert_eq!(layout.clamp_origin(Point::new(40.0, 40.0), size), Point::ZERO);
    }

    #[test]
    fn unmeasured_elements_are_zero_sized() {
        let layout = Layout::default();
        assert_eq!(layout.size_of(ElementId::intern("unmeasured")), Size::ZERO);
    }
}
