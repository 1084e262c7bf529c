//! HTML templating: element records → markup.
//!
//! Three views share one element renderer:
//!
//! - **Canvas view**: what the editor shows, with the placeholder, the
//!   `canvas-element`/`selected` classes and absolute positions.
//! - **Clean markup**: editor-only classes, positions and decorations
//!   stripped. Preview and export both embed exactly this string, so the
//!   element markup is byte-identical between them.
//! - **Property form**: the panel's form for the selected element.

use crate::canvas::Canvas;
use crate::form::{InputKind, PropertyForm};
use crate::id::ElementId;
use crate::model::{Content, PlacedElement};
use std::fmt::Write;

/// Suggested filename for the exported document.
pub const EXPORT_FILENAME: &str = "website.html";
pub const EXPORT_MIME: &str = "text/html";
pub const PLACEHOLDER_TEXT: &str = "Drag elements here to start building";
pub const EMPTY_PANEL_TEXT: &str = "Select an element to edit its properties";
/// Stacking order of an element while it is being dragged.
pub const DRAG_Z_INDEX: u32 = 1000;

/// Wrapper style left on each element once editor styling is stripped.
const CLEAN_WRAPPER_STYLE: &str = "position: static; border: none; box-shadow: none;";
const PREVIEW_CANVAS_STYLE: &str =
    "position: static; border: none; margin: 0; padding: 20px; min-height: auto;";

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Website</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f8fafc;
            color: #1e293b;
            line-height: 1.6;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background: white;
            padding: 40px;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
        }
        button {
            cursor: pointer;
            font-family: inherit;
        }
        hr {
            border: none;
            margin: 20px 0;
        }
    </style>
</head>
<body>
    <div class="container">
"#;

const DOCUMENT_TAIL: &str = "
    </div>
</body>
</html>";

/// Editor-only view state that decorates the canvas view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasView {
    pub selected: Option<ElementId>,
    pub dragging: Option<ElementId>,
}

// ─── Escaping ────────────────────────────────────────────────────────────

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

// ─── Elements ────────────────────────────────────────────────────────────

/// The single content child of an element (`<p>`, `<h2>`, `<button>`,
/// `<img>` or `<hr>`).
pub fn render_content(element: &PlacedElement) -> String {
    let tag = element.kind.content_tag();
    let style = escape_attr(&element.style.to_css());
    match &element.content {
        Content::Text(text) => {
            format!(r#"<{tag} style="{style}">{}</{tag}>"#, escape_text(text))
        }
        Content::Image { src, alt } => format!(
            r#"<{tag} src="{}" alt="{}" style="{style}">"#,
            escape_attr(src),
            escape_attr(alt)
        ),
        Content::Empty => format!(r#"<{tag} style="{style}">"#),
    }
}

/// One element as the editor shows it.
fn render_editor_element(out: &mut String, element: &PlacedElement, view: CanvasView) {
    let class = if view.selected == Some(element.id) {
        "canvas-element selected"
    } else {
        "canvas-element"
    };
    let mut style = format!("left: {}px; top: {}px;", element.position.x, element.position.y);
    if view.dragging == Some(element.id) {
        let _ = write!(style, " z-index: {DRAG_Z_INDEX};");
    }
    let _ = write!(
        out,
        r#"<div class="{class}" data-element-id="{}" style="{style}">{}</div>"#,
        escape_attr(element.id.as_str()),
        render_content(element)
    );
}

/// Inner markup of the editor canvas: placeholder first, then every
/// element in insertion order.
pub fn render_canvas(canvas: &Canvas, view: CanvasView) -> String {
    let display = if canvas.is_empty() { "block" } else { "none" };
    let mut out = String::with_capacity(256 + canvas.len() * 256);
    let _ = write!(
        out,
        r#"<div class="canvas-placeholder" style="display: {display};"><p>{PLACEHOLDER_TEXT}</p></div>"#
    );
    for element in canvas.elements() {
        out.push('\n');
        render_editor_element(&mut out, element, view);
    }
    out
}

/// The shared cleanup transform: every element, in order, with editor
/// classes, positioning and decorations removed. No placeholder.
pub fn render_clean(canvas: &Canvas) -> String {
    let mut out = String::with_capacity(canvas.len() * 256);
    for (i, element) in canvas.elements().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            r#"<div data-element-id="{}" style="{CLEAN_WRAPPER_STYLE}">{}</div>"#,
            escape_attr(element.id.as_str()),
            render_content(element)
        );
    }
    out
}

/// Preview pane content.
pub fn render_preview(canvas: &Canvas) -> String {
    format!(
        r#"<div class="preview-canvas" style="{PREVIEW_CANVAS_STYLE}">{}</div>"#,
        render_clean(canvas)
    )
}

/// The complete static page offered as `website.html`.
#[must_use]
pub fn render_document(canvas: &Canvas) -> String {
    let body = render_clean(canvas);
    let mut out = String::with_capacity(DOCUMENT_HEAD.len() + body.len() + DOCUMENT_TAIL.len());
    out.push_str(DOCUMENT_HEAD);
    out.push_str(&body);
    out.push_str(DOCUMENT_TAIL);
    out
}

// ─── Property panel ──────────────────────────────────────────────────────

/// Panel content when nothing is selected.
pub fn render_empty_panel() -> String {
    format!(r#"<p class="no-selection">{EMPTY_PANEL_TEXT}</p>"#)
}

/// The property form, with current values pre-filled.
pub fn render_form(form: &PropertyForm) -> String {
    let mut out = String::from(r#"<form id="elementProperties">"#);
    for field in &form.fields {
        let id = field.id;
        let value = escape_attr(&field.value);
        let _ = write!(
            out,
            r#"<div class="form-group"><label for="{id}">{}</label>"#,
            escape_text(field.label)
        );
        match &field.input {
            InputKind::TextArea { rows } => {
                let _ = write!(
                    out,
                    r#"<textarea id="{id}" rows="{rows}">{}</textarea>"#,
                    escape_text(&field.value)
                );
            }
            InputKind::Text { placeholder } => {
                let _ = write!(out, r#"<input type="text" id="{id}" value="{value}""#);
                if let Some(placeholder) = placeholder {
                    let _ = write!(out, r#" placeholder="{}""#, escape_attr(placeholder));
                }
                out.push('>');
            }
            InputKind::Url => {
                let _ = write!(out, r#"<input type="url" id="{id}" value="{value}">"#);
            }
            InputKind::Number { min, max } => {
                let _ = write!(
                    out,
                    r#"<input type="number" id="{id}" value="{value}" min="{min}" max="{max}">"#
                );
            }
            InputKind::Color => {
                let _ = write!(out, r#"<input type="color" id="{id}" value="{value}">"#);
            }
            InputKind::Select { options } => {
                let _ = write!(out, r#"<select id="{id}">"#);
                for (option, label) in options.iter() {
                    let selected = if *option == field.value { " selected" } else { "" };
                    let _ = write!(out, r#"<option value="{option}"{selected}>{label}</option>"#);
                }
                out.push_str("</select>");
            }
        }
        out.push_str("</div>");
    }
    out.push_str(r#"<button type="submit" class="btn btn-primary">Apply Changes</button></form>"#);
    out
}
