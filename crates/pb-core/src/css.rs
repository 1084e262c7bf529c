//! Inline CSS: ordered declarations plus the two value readers the
//! property panel needs (leading-integer lengths and hex color swatches).
//!
//! Values are kept verbatim. Nothing here validates CSS; a malformed value
//! written by the user is stored and re-emitted as-is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::Write;
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// An element's `style` attribute as an ordered declaration list.
///
/// Setting an existing property replaces its value in place; a new property
/// is appended. This keeps the emitted attribute stable across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    decls: SmallVec<[Declaration; 8]>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(property, value)` pairs, in order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut style = Self::new();
        for (property, value) in pairs {
            style.set(property, *value);
        }
        style
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|d| d.property == property) {
            Some(decl) => decl.value = value,
            None => self.decls.push(Declaration {
                property: property.to_string(),
                value,
            }),
        }
    }

    /// Remove a property. Returns its old value, if it was set.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.decls.iter().position(|d| d.property == property)?;
        Some(self.decls.remove(pos).value)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.iter()
    }

    /// Serialize as a `style` attribute body: `a: 1; b: 2;`.
    pub fn to_css(&self) -> String {
        let mut out = String::with_capacity(self.decls.len() * 20);
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}: {};", decl.property, decl.value);
        }
        out
    }
}

// ─── Value readers ───────────────────────────────────────────────────────

/// Read the leading integer of a CSS value the way `parseInt(v, 10)` does:
/// `"16px"` → 16, `"8px 16px"` → 8, `" -3em"` → -3, `"auto"` → `None`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let mut input = value.trim_start();
    leading_int.parse_next(&mut input).ok()
}

fn leading_int(input: &mut &str) -> ModalResult<i64> {
    // Overlong digit runs fail `parse_to` and read as "no number".
    (opt(alt(('-', '+'))), digit1.parse_to::<i64>())
        .map(|(sign, n)| if sign == Some('-') { -n } else { n })
        .parse_next(input)
}

/// Convert a computed color to a `#rrggbb` swatch for a color input.
///
/// Hex values pass through untouched. The first `rgb(r,g,b)` or
/// `rgba(r,g,b,a)` occurrence is converted, alpha ignored. Named colors
/// and anything else yield `None` so the caller can fall back to a default.
pub fn color_to_hex(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with('#') {
        return Some(value.to_string());
    }
    value.match_indices("rgb").find_map(|(start, _)| {
        let mut input = &value[start..];
        rgb_function.parse_next(&mut input).ok()
    })
}

fn rgb_function(input: &mut &str) -> ModalResult<String> {
    (
        alt(("rgba(", "rgb(")),
        channel,
        ',',
        multispace0,
        channel,
        ',',
        multispace0,
        channel,
    )
        .map(|(_, r, _, _, g, _, _, b)| format!("#{r:02x}{g:02x}{b:02x}"))
        .parse_next(input)
}

fn channel(input: &mut &str) -> ModalResult<u64> {
    digit1.parse_to::<u64>().parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_replaces_in_place_and_appends_new() {
        let mut style = InlineStyle::from_pairs(&[("margin", "0"), ("font-size", "16px")]);
        style.set("font-size", "20px");
        style.set("font-weight", "700");
        assert_eq!(
            style.to_css(),
            "margin: 0; font-size: 20px; font-weight: 700;"
        );
    }

    #[test]
    fn remove_drops_declaration() {
        let mut style = InlineStyle::from_pairs(&[("left", "5px"), ("top", "6px")]);
        assert_eq!(style.remove("left").as_deref(), Some("5px"));
        assert_eq!(style.remove("left"), None);
        assert_eq!(style.to_css(), "top: 6px;");
    }

    #[test]
    fn leading_int_follows_parse_int() {
        assert_eq!(parse_leading_int("16px"), Some(16));
        assert_eq!(parse_leading_int("8px 16px"), Some(8));
        assert_eq!(parse_leading_int("  -3em"), Some(-3));
        assert_eq!(parse_leading_int("+12"), Some(12));
        assert_eq!(parse_leading_int("auto"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("px12"), None);
    }

    #[test]
    fn hex_passes_through() {
        assert_eq!(color_to_hex("#374151").as_deref(), Some("#374151"));
        assert_eq!(color_to_hex("#FFF").as_deref(), Some("#FFF"));
    }

    #[test]
    fn rgb_and_rgba_convert() {
        assert_eq!(color_to_hex("rgb(59, 130, 246)").as_deref(), Some("#3b82f6"));
        assert_eq!(color_to_hex("rgba(0,0,0,0.5)").as_deref(), Some("#000000"));
        assert_eq!(
            color_to_hex("1px solid rgb(1, 2, 3)").as_deref(),
            Some("#010203")
        );
    }

    #[test]
    fn unparsable_colors_yield_none() {
        assert_eq!(color_to_hex(""), None);
        assert_eq!(color_to_hex("white"), None);
        assert_eq!(color_to_hex("rgb( 1, 2, 3)"), None);
        assert_eq!(color_to_hex("rgb(1 ,2, 3)"), None);
    }
}
