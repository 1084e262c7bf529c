//! Element kind registry.
//!
//! Each kind is one `KindSpec` entry: its tags, its defaults, the form it
//! shows in the property panel and how a submitted form is written back.
//! Adding a kind means adding an entry here, not growing a central match.

use crate::css::InlineStyle;
use crate::form::{FormField, FormValues, InputKind, PropertyForm, hex_or, int_or};
use crate::model::{Content, ElementKind, PlacedElement};
use smallvec::smallvec;

/// Source of a freshly dropped image until the user sets a URL.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/200x150/667eea/ffffff?text=Image";

const FONT_WEIGHTS: &[(&str, &str)] = &[("400", "Normal"), ("600", "Semi Bold"), ("700", "Bold")];

/// Everything the editor needs to know about one element kind.
pub struct KindSpec {
    pub kind: ElementKind,
    /// Drag-payload tag.
    pub tag: &'static str,
    /// Tag of the rendered content child.
    pub content_tag: &'static str,
    /// Child tags that identify this kind when classifying markup.
    pub probe_tags: &'static [&'static str],
    pub defaults: fn() -> (Content, InlineStyle),
    pub form: fn(&PlacedElement) -> PropertyForm,
    pub apply: fn(&mut PlacedElement, &FormValues),
}

/// Registry order is also probe order: the first matching entry wins.
pub static REGISTRY: [KindSpec; 5] = [
    KindSpec {
        kind: ElementKind::Text,
        tag: "text",
        content_tag: "p",
        probe_tags: &["p"],
        defaults: text_defaults,
        form: typography_form,
        apply: apply_typography,
    },
    KindSpec {
        kind: ElementKind::Heading,
        tag: "heading",
        content_tag: "h2",
        probe_tags: &["h1", "h2", "h3", "h4", "h5", "h6"],
        defaults: heading_defaults,
        form: typography_form,
        apply: apply_typography,
    },
    KindSpec {
        kind: ElementKind::Button,
        tag: "button",
        content_tag: "button",
        probe_tags: &["button"],
        defaults: button_defaults,
        form: button_form,
        apply: apply_button,
    },
    KindSpec {
        kind: ElementKind::Image,
        tag: "image",
        content_tag: "img",
        probe_tags: &["img"],
        defaults: image_defaults,
        form: image_form,
        apply: apply_image,
    },
    KindSpec {
        kind: ElementKind::Divider,
        tag: "divider",
        content_tag: "hr",
        probe_tags: &["hr"],
        defaults: divider_defaults,
        form: divider_form,
        apply: apply_divider,
    },
];

pub fn spec(kind: ElementKind) -> &'static KindSpec {
    match kind {
        ElementKind::Text => &REGISTRY[0],
        ElementKind::Heading => &REGISTRY[1],
        ElementKind::Button => &REGISTRY[2],
        ElementKind::Image => &REGISTRY[3],
        ElementKind::Divider => &REGISTRY[4],
    }
}

/// Classify markup by the tags of its descendants.
pub fn probe_kind<'a>(child_tags: impl IntoIterator<Item = &'a str>) -> Option<ElementKind> {
    let tags: Vec<String> = child_tags
        .into_iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    REGISTRY
        .iter()
        .find(|spec| tags.iter().any(|t| spec.probe_tags.contains(&t.as_str())))
        .map(|spec| spec.kind)
}

/// Build the property form for an element, pre-filled from its live values.
pub fn form_for(element: &PlacedElement) -> PropertyForm {
    (spec(element.kind).form)(element)
}

/// Write submitted values onto an element. Fields missing from `values`
/// are left untouched; present values are stored without validation.
pub fn apply_form(element: &mut PlacedElement, values: &FormValues) {
    (spec(element.kind).apply)(element, values)
}

// ─── Defaults ────────────────────────────────────────────────────────────

fn text_defaults() -> (Content, InlineStyle) {
    (
        Content::Text("Edit this text".into()),
        InlineStyle::from_pairs(&[("margin", "0"), ("font-size", "16px"), ("color", "#374151")]),
    )
}

fn heading_defaults() -> (Content, InlineStyle) {
    (
        Content::Text("Heading".into()),
        InlineStyle::from_pairs(&[
            ("margin", "0"),
            ("font-size", "24px"),
            ("color", "#1e293b"),
            ("font-weight", "600"),
        ]),
    )
}

fn button_defaults() -> (Content, InlineStyle) {
    (
        Content::Text("Click Me".into()),
        InlineStyle::from_pairs(&[
            ("padding", "8px 16px"),
            ("font-size", "14px"),
            ("background-color", "#3b82f6"),
            ("color", "white"),
            ("border", "none"),
            ("border-radius", "6px"),
            ("cursor", "pointer"),
        ]),
    )
}

fn image_defaults() -> (Content, InlineStyle) {
    (
        Content::Image {
            src: PLACEHOLDER_IMAGE_URL.into(),
            alt: String::new(),
        },
        InlineStyle::from_pairs(&[
            ("max-width", "200px"),
            ("height", "auto"),
            ("display", "block"),
        ]),
    )
}

fn divider_defaults() -> (Content, InlineStyle) {
    (
        Content::Empty,
        InlineStyle::from_pairs(&[
            ("width", "100%"),
            ("border", "none"),
            ("height", "2px"),
            ("background-color", "#e2e8f0"),
            ("margin", "10px 0"),
        ]),
    )
}

// ─── Forms ───────────────────────────────────────────────────────────────

fn field(id: &'static str, label: &'static str, input: InputKind, value: String) -> FormField {
    FormField {
        id,
        label,
        input,
        value,
    }
}

fn typography_form(el: &PlacedElement) -> PropertyForm {
    PropertyForm {
        element: el.id,
        kind: el.kind,
        fields: smallvec![
            field(
                "textContent",
                "Text Content",
                InputKind::TextArea { rows: 3 },
                el.text().unwrap_or_default().to_string(),
            ),
            field(
                "fontSize",
                "Font Size (px)",
                InputKind::Number { min: 8, max: 72 },
                int_or(el.style.get("font-size"), 16),
            ),
            field(
                "textColor",
                "Text Color",
                InputKind::Color,
                hex_or(el.style.get("color"), "#374151"),
            ),
            field(
                "fontWeight",
                "Font Weight",
                InputKind::Select {
                    options: FONT_WEIGHTS,
                },
                el.style.get("font-weight").unwrap_or_default().to_string(),
            ),
        ],
    }
}

fn button_form(el: &PlacedElement) -> PropertyForm {
    PropertyForm {
        element: el.id,
        kind: el.kind,
        fields: smallvec![
            field(
                "buttonText",
                "Button Text",
                InputKind::Text { placeholder: None },
                el.text().unwrap_or_default().to_string(),
            ),
            field(
                "buttonBgColor",
                "Background Color",
                InputKind::Color,
                hex_or(el.style.get("background-color"), "#3b82f6"),
            ),
            field(
                "buttonTextColor",
                "Text Color",
                InputKind::Color,
                hex_or(el.style.get("color"), "#ffffff"),
            ),
            field(
                "buttonPadding",
                "Padding (px)",
                InputKind::Number { min: 4, max: 32 },
                int_or(el.style.get("padding"), 8),
            ),
            field(
                "buttonBorderRadius",
                "Border Radius (px)",
                InputKind::Number { min: 0, max: 50 },
                int_or(el.style.get("border-radius"), 6),
            ),
        ],
    }
}

fn image_form(el: &PlacedElement) -> PropertyForm {
    let (src, alt) = el.image().unwrap_or_default();
    PropertyForm {
        element: el.id,
        kind: el.kind,
        fields: smallvec![
            field("imageUrl", "Image URL", InputKind::Url, src.to_string()),
            field(
                "imageWidth",
                "Width (px)",
                InputKind::Number { min: 50, max: 800 },
                int_or(el.style.get("max-width"), 200),
            ),
            field(
                "imageAlt",
                "Alt Text",
                InputKind::Text {
                    placeholder: Some("Description for accessibility"),
                },
                alt.to_string(),
            ),
        ],
    }
}

fn divider_form(el: &PlacedElement) -> PropertyForm {
    PropertyForm {
        element: el.id,
        kind: el.kind,
        fields: smallvec![
            field(
                "dividerColor",
                "Color",
                InputKind::Color,
                hex_or(el.style.get("background-color"), "#e2e8f0"),
            ),
            field(
                "dividerHeight",
                "Height (px)",
                InputKind::Number { min: 1, max: 10 },
                int_or(el.style.get("height"), 2),
            ),
        ],
    }
}

// ─── Apply ───────────────────────────────────────────────────────────────

fn set_px(el: &mut PlacedElement, values: &FormValues, field: &str, property: &str) {
    if let Some(v) = values.get(field) {
        el.style.set(property, format!("{v}px"));
    }
}

fn set_raw(el: &mut PlacedElement, values: &FormValues, field: &str, property: &str) {
    if let Some(v) = values.get(field) {
        el.style.set(property, v);
    }
}

fn apply_typography(el: &mut PlacedElement, values: &FormValues) {
    if let Some(text) = values.get("textContent") {
        el.set_text(text);
    }
    set_px(el, values, "fontSize", "font-size");
    set_raw(el, values, "textColor", "color");
    set_raw(el, values, "fontWeight", "font-weight");
}

fn apply_button(el: &mut PlacedElement, values: &FormValues) {
    if let Some(text) = values.get("buttonText") {
        el.set_text(text);
    }
    set_raw(el, values, "buttonBgColor", "background-color");
    set_raw(el, values, "buttonTextColor", "color");
    set_px(el, values, "buttonPadding", "padding");
    set_px(el, values, "buttonBorderRadius", "border-radius");
}

fn apply_image(el: &mut PlacedElement, values: &FormValues) {
    if let Some(src) = values.get("imageUrl") {
        el.set_image_src(src);
    }
    set_px(el, values, "imageWidth", "max-width");
    if let Some(alt) = values.get("imageAlt") {
        el.set_image_alt(alt);
    }
}

fn apply_divider(el: &mut PlacedElement, values: &FormValues) {
    set_raw(el, values, "dividerColor", "background-color");
    set_px(el, values, "dividerHeight", "height");
}
