//! Tool system for canvas interactions.
//!
//! A tool translates input events into `CanvasMutation`s that the editor
//! applies to the canvas store. Tools never mutate the store themselves.

use crate::input::InputEvent;
use pb_core::{Canvas, CanvasMutation, ElementId, Layout, Point};

/// Read-only view of the editor state a tool may consult.
pub struct ToolContext<'a> {
    pub canvas: &'a Canvas,
    pub layout: &'a Layout,
}

/// Trait for tools that handle input and produce mutations.
pub trait Tool {
    /// Handle an input event, returning zero or more mutations.
    /// `hit` is the topmost element under the pointer, if any.
    fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<ElementId>,
        ctx: &ToolContext<'_>,
    ) -> Vec<CanvasMutation>;
}

// ─── Drag Tool ───────────────────────────────────────────────────────────

/// Captured state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    id: ElementId,
    pointer_start: Point,
    origin_start: Point,
}

/// Free-form repositioning of one element, clamped to the canvas.
///
/// Capture starts on pointer-down over an element and ends on pointer-up
/// or cancel. Moves outside a gesture are ignored.
#[derive(Debug, Default)]
pub struct DragTool {
    gesture: Option<Gesture>,
}

impl DragTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently captured, if a gesture is in progress.
    pub fn dragging(&self) -> Option<ElementId> {
        self.gesture.map(|g| g.id)
    }

    /// Drop capture without producing a mutation.
    pub fn release(&mut self) -> bool {
        self.gesture.take().is_some()
    }
}

impl Tool for DragTool {
    fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<ElementId>,
        ctx: &ToolContext<'_>,
    ) -> Vec<CanvasMutation> {
        match event {
            InputEvent::PointerDown { at } => {
                self.gesture = hit
                    .and_then(|id| ctx.canvas.get(id).ok())
                    .map(|element| Gesture {
                        id: element.id,
                        pointer_start: *at,
                        origin_start: element.position,
                    });
                vec![]
            }
            InputEvent::PointerMove { at } => {
                let Some(gesture) = self.gesture else {
                    return vec![];
                };
                // Element deleted mid-gesture: nothing left to move.
                if !ctx.canvas.contains(gesture.id) {
                    self.gesture = None;
                    return vec![];
                }
                let wanted = gesture.origin_start + (*at - gesture.pointer_start);
                let to = ctx
                    .layout
                    .clamp_origin(wanted, ctx.layout.size_of(gesture.id));
                vec![CanvasMutation::MoveElement { id: gesture.id, to }]
            }
            InputEvent::PointerUp { .. } | InputEvent::Cancel => {
                self.gesture = None;
                vec![]
            }
            InputEvent::Key { .. } => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_core::{ElementKind, Size, Viewport};

    fn setup() -> (Canvas, Layout, ElementId) {
        let mut canvas = Canvas::new();
        let mut layout = Layout::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        let id = canvas.create(ElementKind::Button, Point::new(50.0, 50.0));
        layout.set_size(id, Size::new(100.0, 40.0));
        (canvas, layout, id)
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let (canvas, layout, id) = setup();
        let ctx = ToolContext {
            canvas: &canvas,
            layout: &layout,
        };
        let mut tool = DragTool::new();
        tool.handle(&InputEvent::pointer_down(60.0, 60.0), Some(id), &ctx);
        assert_eq!(tool.dragging(), Some(id));
        let muts = tool.handle(&InputEvent::pointer_move(90.0, 80.0), None, &ctx);
        assert_eq!(
            muts,
            vec![CanvasMutation::MoveElement {
                id,
                to: Point::new(80.0, 70.0)
            }]
        );
    }

    #[test]
    fn drag_clamps_to_canvas() {
        let (canvas, layout, id) = setup();
        let ctx = ToolContext {
            canvas: &canvas,
            layout: &layout,
        };
        let mut tool = DragTool::new();
        tool.handle(&InputEvent::pointer_down(60.0, 60.0), Some(id), &ctx);
        let muts = tool.handle(&InputEvent::pointer_move(1000.0, 1000.0), None, &ctx);
        assert_eq!(
            muts,
            vec![CanvasMutation::MoveElement {
                id,
                to: Point::new(300.0, 260.0)
            }]
        );
        let muts = tool.handle(&InputEvent::pointer_move(-500.0, -500.0), None, &ctx);
        assert_eq!(
            muts,
            vec![CanvasMutation::MoveElement {
                id,
                to: Point::ZERO
            }]
        );
    }

    #[test]
    fn moves_without_capture_are_ignored() {
        let (canvas, layout, id) = setup();
        let ctx = ToolContext {
            canvas: &canvas,
            layout: &layout,
        };
        let mut tool = DragTool::new();
        // Pointer down on bare canvas captures nothing.
        tool.handle(&InputEvent::pointer_down(5.0, 5.0), None, &ctx);
        assert!(tool.handle(&InputEvent::pointer_move(9.0, 9.0), None, &ctx).is_empty());

        tool.handle(&InputEvent::pointer_down(60.0, 60.0), Some(id), &ctx);
        tool.handle(&InputEvent::pointer_up(60.0, 60.0), None, &ctx);
        assert_eq!(tool.dragging(), None);
        assert!(tool.handle(&InputEvent::pointer_move(99.0, 99.0), None, &ctx).is_empty());
    }

    #[test]
    fn cancel_releases_capture() {
        let (canvas, layout, id) = setup();
        let ctx = ToolContext {
            canvas: &canvas,
            layout: &layout,
        };
        let mut tool = DragTool::new();
        tool.handle(&InputEvent::pointer_down(60.0, 60.0), Some(id), &ctx);
        tool.handle(&InputEvent::Cancel, None, &ctx);
        assert_eq!(tool.dragging(), None);
    }
}
