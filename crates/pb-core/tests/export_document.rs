//! Integration tests: canvas store → property forms → exported document.
//!
//! Exercises the full `pb-core` pipeline: create elements, write form values
//! back, then render the clean document offered for download.

use pb_core::html::{EXPORT_FILENAME, EXPORT_MIME};
use pb_core::{Canvas, ElementKind, FormValues, Point, apply_form, form_for, render_document};
use pretty_assertions::assert_eq;

fn edit(canvas: &mut Canvas, id: pb_core::ElementId, values: &[(&str, &str)]) {
    let values: FormValues = values.iter().copied().collect();
    apply_form(canvas.get_mut(id).unwrap(), &values);
}

// ─── Full document ───────────────────────────────────────────────────────

#[test]
fn landing_page_matches_fixture() {
    let mut canvas = Canvas::new();
    let heading = canvas.create(ElementKind::Heading, Point::new(40.0, 30.0));
    let scratch = canvas.create(ElementKind::Text, Point::new(40.0, 90.0));
    let image = canvas.create(ElementKind::Image, Point::new(40.0, 140.0));
    let button = canvas.create(ElementKind::Button, Point::new(40.0, 320.0));
    canvas.remove(scratch);

    edit(
        &mut canvas,
        heading,
        &[
            ("textContent", "Welcome & hello"),
            ("fontSize", "32"),
            ("textColor", "#0f172a"),
            ("fontWeight", "700"),
        ],
    );
    edit(
        &mut canvas,
        image,
        &[
            ("imageUrl", "https://example.com/hero.png"),
            ("imageWidth", "320"),
            ("imageAlt", "Hero \"banner\""),
        ],
    );
    edit(
        &mut canvas,
        button,
        &[
            ("buttonText", "Sign up"),
            ("buttonBgColor", "#10b981"),
            ("buttonTextColor", "#ffffff"),
            ("buttonPadding", "12"),
            ("buttonBorderRadius", "20"),
        ],
    );

    let expected = include_str!("fixtures/landing_page.html");
    assert_eq!(render_document(&canvas), expected);
}

#[test]
fn empty_canvas_exports_bare_skeleton() {
    let doc = render_document(&Canvas::new());
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>My Website</title>"));
    assert_eq!(doc.matches(r#"<div class="container">"#).count(), 1);
    assert!(!doc.contains("data-element-id"));
    assert!(!doc.contains("canvas-placeholder"));
    assert!(doc.ends_with("</html>"));
}

#[test]
fn export_target_is_html_file() {
    assert_eq!(EXPORT_FILENAME, "website.html");
    assert_eq!(EXPORT_MIME, "text/html");
}

// ─── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn edited_text_exports_without_positioning() {
    let mut canvas = Canvas::new();
    let id = canvas.create(ElementKind::Text, Point::new(120.0, 75.0));
    edit(
        &mut canvas,
        id,
        &[
            ("textContent", "Hello"),
            ("fontSize", "20"),
            ("textColor", "#374151"),
            ("fontWeight", "400"),
        ],
    );

    let doc = render_document(&canvas);
    assert!(doc.contains(
        r#"<p style="margin: 0; font-size: 20px; color: #374151; font-weight: 400;">Hello</p>"#
    ));
    assert!(!doc.contains("position: absolute"));
    assert!(!doc.contains("left:"));
    assert!(!doc.contains("120"));
}

#[test]
fn middle_delete_keeps_relative_order() {
    let mut canvas = Canvas::new();
    let a = canvas.create(ElementKind::Heading, Point::ZERO);
    let b = canvas.create(ElementKind::Text, Point::ZERO);
    let c = canvas.create(ElementKind::Divider, Point::ZERO);
    canvas.remove(b);

    let doc = render_document(&canvas);
    let first = doc.find(&format!(r#"data-element-id="{a}""#)).unwrap();
    let last = doc.find(&format!(r#"data-element-id="{c}""#)).unwrap();
    assert!(first < last);
    assert!(!doc.contains(&format!(r#"data-element-id="{b}""#)));
}

#[test]
fn reopened_form_reflects_applied_values() {
    let mut canvas = Canvas::new();
    let id = canvas.create(ElementKind::Divider, Point::ZERO);
    edit(
        &mut canvas,
        id,
        &[("dividerColor", "#ff0000"), ("dividerHeight", "5")],
    );
    let form = form_for(canvas.get(id).unwrap());
    assert_eq!(form.value("dividerColor"), Some("#ff0000"));
    assert_eq!(form.value("dividerHeight"), Some("5"));
}

#[test]
fn rgb_colors_prefill_as_hex() {
    let mut canvas = Canvas::new();
    let id = canvas.create(ElementKind::Button, Point::ZERO);
    edit(&mut canvas, id, &[("buttonBgColor", "rgb(16, 185, 129)")]);
    let form = form_for(canvas.get(id).unwrap());
    assert_eq!(form.value("buttonBgColor"), Some("#10b981"));
}
