//! WASM bridge for PB: exposes the page builder engine to the browser page.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards DOM events
//! here and swaps in the returned markup whenever a handler reports a change.

mod download;

use download::{BrowserConfirm, BrowserDownload};
use pb_core::{ElementId, FormValues, Point, Size, Viewport};
use pb_editor::Editor;
use wasm_bindgen::prelude::*;

/// Id of the preview overlay; a click landing on it (not its content)
/// closes the preview.
const PREVIEW_MODAL_ID: &str = "previewModal";

/// The main WASM-facing page builder controller.
///
/// Holds the editor session. All interaction from the page JS goes through
/// this struct. Methods returning `bool` report whether the page must
/// re-render.
#[wasm_bindgen]
pub struct PageBuilder {
    editor: Editor,
}

#[wasm_bindgen]
impl PageBuilder {
    /// Create a controller for a canvas of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        console_logger_setup();

        Self {
            editor: Editor::new(Viewport { width, height }),
        }
    }

    /// Resize the canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.editor.resize(width, height);
    }

    /// Report the rendered size of an element, used for drag clamping and
    /// hit testing.
    pub fn set_element_size(&mut self, id: &str, width: f64, height: f64) {
        if let Some(id) = ElementId::lookup(id) {
            self.editor.set_element_size(id, Size::new(width, height));
        }
    }

    // ─── Palette drops ───────────────────────────────────────────────────

    pub fn drag_over(&mut self) -> bool {
        self.editor.drag_over()
    }

    pub fn drag_leave(&mut self) -> bool {
        self.editor.drag_leave()
    }

    /// Drop a palette item. Returns the new element id, or `undefined` for
    /// an unknown payload.
    pub fn handle_drop(
        &mut self,
        payload: &str,
        client_x: f64,
        client_y: f64,
        canvas_left: f64,
        canvas_top: f64,
    ) -> Option<String> {
        self.editor
            .drop_element(
                payload,
                Point::new(client_x, client_y),
                Point::new(canvas_left, canvas_top),
            )
            .map(|id| id.to_string())
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Handle pointer down in canvas coordinates. Returns true if a drag
    /// started.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_down(Point::new(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_move(Point::new(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_up(Point::new(x, y))
    }

    /// First touch point of a `touchstart`, in canvas coordinates.
    pub fn handle_touch_start(&mut self, x: f64, y: f64) -> bool {
        self.editor.touch_start(&[Point::new(x, y)])
    }

    /// Pointer cancel or window blur.
    pub fn handle_cancel(&mut self) -> bool {
        self.editor.cancel_gesture()
    }

    pub fn handle_click(&mut self, x: f64, y: f64) -> bool {
        self.editor.click(Point::new(x, y))
    }

    /// Handle a `keydown` key name. Returns true if the view changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.editor
            .handle_key(key)
            .is_some_and(|(_, changed)| changed)
    }

    // ─── Editing ─────────────────────────────────────────────────────────

    /// Submit the property form. `json` maps field ids to their values.
    pub fn apply_properties(&mut self, json: &str) -> Result<bool, JsValue> {
        let values: FormValues = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("invalid form values: {e}")))?;
        Ok(self.editor.apply_properties(&values))
    }

    pub fn delete_selected(&mut self) -> bool {
        self.editor.delete_selected()
    }

    /// Ask for confirmation, then remove every element.
    pub fn clear_canvas(&mut self) -> bool {
        self.editor.clear(&BrowserConfirm)
    }

    // ─── Preview & export ────────────────────────────────────────────────

    /// Open the preview and return its content.
    pub fn show_preview(&mut self) -> String {
        self.editor.show_preview()
    }

    pub fn hide_preview(&mut self) -> bool {
        self.editor.hide_preview()
    }

    /// Close the preview when the click target is the overlay itself.
    pub fn handle_modal_click(&mut self, target_id: &str) -> bool {
        target_id == PREVIEW_MODAL_ID && self.editor.hide_preview()
    }

    /// Download the page as `website.html`.
    pub fn export_html(&self) -> Result<(), JsValue> {
        self.editor
            .export(&BrowserDownload)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The exported document as a string.
    pub fn generate_html(&self) -> String {
        self.editor.document()
    }

    // ─── Render getters ──────────────────────────────────────────────────

    pub fn canvas_html(&self) -> String {
        self.editor.canvas_html()
    }

    pub fn canvas_class(&self) -> String {
        self.editor.canvas_class().to_string()
    }

    pub fn panel_html(&self) -> String {
        self.editor.panel_html()
    }

    pub fn preview_html(&self) -> String {
        self.editor.preview_html()
    }

    pub fn is_preview_open(&self) -> bool {
        self.editor.is_preview_open()
    }

    pub fn get_selected_id(&self) -> Option<String> {
        self.editor.selected().map(|id| id.to_string())
    }

    /// All elements in canvas order, as a JSON array.
    pub fn elements_json(&self) -> String {
        serde_json::to_string(self.editor.canvas().elements()).unwrap_or_else(|_| "[]".to_string())
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("PB WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

fn console_logger_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_LOGGER: Once = Once::new();
        SET_LOGGER.call_once(|| {
            if console_log::init_with_level(log::Level::Debug).is_err() {
                web_sys::console::warn_1(&"PB: logger already installed".into());
            }
        });
    }
}

// ─── Standalone functions (no controller needed) ─────────────────────────

/// Palette entries as JSON: `[{"kind":"text","tag":"p"}, ...]`.
#[wasm_bindgen]
pub fn element_kinds() -> String {
    let kinds: Vec<serde_json::Value> = pb_core::ElementKind::ALL
        .iter()
        .map(|kind| serde_json::json!({ "kind": kind.as_str(), "tag": kind.content_tag() }))
        .collect();
    serde_json::Value::Array(kinds).to_string()
}
