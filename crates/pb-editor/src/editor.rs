//! The editor session: one explicit value holding all builder state.
//!
//! Every host event maps to one method here and runs to completion.
//! Methods return `true` when the visible state changed and the host
//! should re-render. Interactive failures (unknown drop payloads, deleting
//! with nothing selected, stale ids) are silent no-ops.

use crate::hit::hit_test;
use crate::host::{ConfirmPrompt, FileSaver, HostError};
use crate::input::InputEvent;
use crate::palette::resolve_drop;
use crate::panel::{PanelState, PropertyPanel};
use crate::selection::Selection;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{DragTool, Tool, ToolContext};
use pb_core::html::{self, CanvasView, EXPORT_FILENAME, EXPORT_MIME};
use pb_core::{
    Canvas, CanvasMutation, ElementId, ElementKind, FormValues, Layout, Point, Size, Viewport,
};

/// Prompt shown before the canvas is cleared.
pub const CLEAR_CONFIRM_MESSAGE: &str = "Are you sure you want to clear all elements?";

pub struct Editor {
    canvas: Canvas,
    layout: Layout,
    selection: Selection,
    panel: PropertyPanel,
    drag: DragTool,
    /// A palette drag is hovering over the canvas.
    drop_hover: bool,
    preview_open: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Editor {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            canvas: Canvas::new(),
            layout: Layout::new(viewport),
            selection: Selection::new(),
            panel: PropertyPanel::new(),
            drag: DragTool::new(),
            drop_hover: false,
            preview_open: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selection.current()
    }

    pub fn panel(&self) -> &PanelState {
        self.panel.state()
    }

    pub fn dragging(&self) -> Option<ElementId> {
        self.drag.dragging()
    }

    pub fn is_drop_hover(&self) -> bool {
        self.drop_hover
    }

    pub fn is_preview_open(&self) -> bool {
        self.preview_open
    }

    // ─── Layout measurements ─────────────────────────────────────────────

    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout.viewport = Viewport { width, height };
    }

    /// Record the host-measured size of an element. Unknown ids are ignored.
    pub fn set_element_size(&mut self, id: ElementId, size: Size) {
        if self.canvas.contains(id) {
            self.layout.set_size(id, size);
        }
    }

    // ─── Palette drops ───────────────────────────────────────────────────

    pub fn drag_over(&mut self) -> bool {
        !std::mem::replace(&mut self.drop_hover, true)
    }

    pub fn drag_leave(&mut self) -> bool {
        std::mem::replace(&mut self.drop_hover, false)
    }

    /// Handle a palette drop. Returns the new element, or `None` when the
    /// payload names no known kind.
    pub fn drop_element(
        &mut self,
        payload: &str,
        client: Point,
        canvas_origin: Point,
    ) -> Option<ElementId> {
        self.drop_hover = false;
        match resolve_drop(payload, client, canvas_origin)? {
            CanvasMutation::Insert { kind, at } => Some(self.add_element(kind, at)),
            _ => None,
        }
    }

    /// Create an element, append it and select it.
    pub fn add_element(&mut self, kind: ElementKind, at: Point) -> ElementId {
        let id = self.canvas.create(kind, at);
        self.select(id);
        id
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Feed a pointer/focus/key event through the drag tool or shortcut map.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { key } = event {
            return self.handle_key(key).is_some_and(|(_, changed)| changed);
        }
        let was_dragging = self.drag.dragging();
        let hit = match event {
            InputEvent::PointerDown { at } => hit_test(&self.canvas, &self.layout, *at),
            _ => None,
        };
        let mutations = {
            let ctx = ToolContext {
                canvas: &self.canvas,
                layout: &self.layout,
            };
            self.drag.handle(event, hit, &ctx)
        };
        let mut changed = was_dragging != self.drag.dragging();
        for mutation in mutations {
            changed |= self.canvas.apply(mutation).is_some();
        }
        changed
    }

    pub fn pointer_down(&mut self, at: Point) -> bool {
        self.handle_input(&InputEvent::PointerDown { at })
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        self.handle_input(&InputEvent::PointerMove { at })
    }

    pub fn pointer_up(&mut self, at: Point) -> bool {
        self.handle_input(&InputEvent::PointerUp { at })
    }

    pub fn touch_start(&mut self, touches: &[Point]) -> bool {
        match InputEvent::from_touch_start(touches) {
            Some(event) => self.handle_input(&event),
            None => false,
        }
    }

    /// Focus loss or pointer cancel: release any drag capture.
    pub fn cancel_gesture(&mut self) -> bool {
        self.handle_input(&InputEvent::Cancel)
    }

    /// A click selects the element under the pointer; a click on the bare
    /// canvas or the placeholder deselects.
    pub fn click(&mut self, at: Point) -> bool {
        match hit_test(&self.canvas, &self.layout, at) {
            Some(id) => self.select(id),
            None => self.deselect(),
        }
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select an element and refresh the panel, even if it was already
    /// selected. Returns `false` for ids not on the canvas.
    pub fn select(&mut self, id: ElementId) -> bool {
        if !self.canvas.contains(id) {
            return false;
        }
        if let Some(previous) = self.selection.select(id) {
            log::debug!("select {id} (was {previous})");
        }
        self.panel.refresh(&self.canvas, Some(id));
        true
    }

    /// Clear the selection and reset the panel to its empty state.
    pub fn deselect(&mut self) -> bool {
        let had = self.selection.clear().is_some();
        let had_form = self.panel.target().is_some();
        self.panel.refresh(&self.canvas, None);
        had || had_form
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Resolve and run a shortcut. Returns the action and whether it
    /// changed anything, or `None` for unbound keys.
    pub fn handle_key(&mut self, key: &str) -> Option<(ShortcutAction, bool)> {
        let action = ShortcutMap::resolve(key)?;
        log::trace!("shortcut {key} -> {}", action.name());
        let changed = match action {
            ShortcutAction::Delete => self.delete_selected(),
            ShortcutAction::Deselect => self.deselect(),
        };
        Some((action, changed))
    }

    // ─── Removal ─────────────────────────────────────────────────────────

    /// Remove an element. The selection is cleared first if it pointed at
    /// this element. Non-members are a no-op.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if !self.canvas.contains(id) {
            return false;
        }
        if self.selection.is_selected(id) {
            self.deselect();
        }
        if self.drag.dragging() == Some(id) {
            self.drag.release();
        }
        self.layout.forget(id);
        self.canvas.apply(CanvasMutation::Remove { id }).is_some()
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selection.current() {
            Some(id) => self.delete_element(id),
            None => false,
        }
    }

    /// Remove everything after the user confirms. Declining leaves the
    /// state untouched. Returns whether the canvas was cleared.
    pub fn clear(&mut self, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(CLEAR_CONFIRM_MESSAGE) {
            return false;
        }
        self.deselect();
        self.drag.release();
        self.layout.clear();
        self.canvas.apply(CanvasMutation::Clear);
        true
    }

    // ─── Properties ──────────────────────────────────────────────────────

    /// Submit the panel form. Returns `false` when nothing is selected.
    pub fn apply_properties(&mut self, values: &FormValues) -> bool {
        self.panel.submit(&mut self.canvas, values)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn canvas_html(&self) -> String {
        html::render_canvas(
            &self.canvas,
            CanvasView {
                selected: self.selection.current(),
                dragging: self.drag.dragging(),
            },
        )
    }

    /// Class list of the canvas container itself.
    pub fn canvas_class(&self) -> &'static str {
        if self.drop_hover {
            "canvas dragover"
        } else {
            "canvas"
        }
    }

    pub fn panel_html(&self) -> String {
        self.panel.render_html()
    }

    // ─── Preview & export ────────────────────────────────────────────────

    /// Open (or re-render) the preview modal and return its content.
    pub fn show_preview(&mut self) -> String {
        self.preview_open = true;
        html::render_preview(&self.canvas)
    }

    pub fn preview_html(&self) -> String {
        html::render_preview(&self.canvas)
    }

    pub fn hide_preview(&mut self) -> bool {
        std::mem::replace(&mut self.preview_open, false)
    }

    /// The full static document for the current canvas.
    pub fn document(&self) -> String {
        html::render_document(&self.canvas)
    }

    /// Hand the document to the host as `website.html`.
    pub fn export(&self, saver: &dyn FileSaver) -> Result<(), HostError> {
        let document = self.document();
        log::debug!(
            "export {} elements ({} bytes)",
            self.canvas.len(),
            document.len()
        );
        saver.save(document.as_bytes(), EXPORT_FILENAME, EXPORT_MIME)
    }
}
