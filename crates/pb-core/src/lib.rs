pub mod canvas;
pub mod css;
pub mod error;
pub mod form;
pub mod html;
pub mod id;
pub mod kinds;
pub mod layout;
pub mod model;

pub use canvas::{Canvas, CanvasMutation};
pub use error::{Error, Result};
pub use form::{FormField, FormValues, InputKind, PropertyForm};
pub use html::{CanvasView, render_canvas, render_clean, render_document, render_preview};
pub use id::ElementId;
pub use kinds::{KindSpec, apply_form, form_for, probe_kind};
pub use layout::{Layout, Viewport};
pub use model::*;

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Point, Rect, Size, Vec2};
