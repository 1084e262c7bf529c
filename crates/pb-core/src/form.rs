//! Property form model: the editable fields derived from one element.
//!
//! A `PropertyForm` is rebuilt from the element's live values every time it
//! is shown and thrown away afterwards. Submitted values come back as
//! `FormValues` keyed by field id.

use crate::css::{color_to_hex, parse_leading_int};
use crate::id::ElementId;
use crate::model::ElementKind;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Input widget for one field, with its native constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "input", rename_all = "lowercase")]
pub enum InputKind {
    TextArea {
        rows: u8,
    },
    Text {
        placeholder: Option<&'static str>,
    },
    Url,
    Number {
        min: i64,
        max: i64,
    },
    Color,
    /// `(value, label)` pairs.
    Select {
        options: &'static [(&'static str, &'static str)],
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub input: InputKind,
    /// Pre-filled value. For selects, an empty value selects nothing.
    pub value: String,
}

/// The form shown for the selected element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyForm {
    pub element: ElementId,
    pub kind: ElementKind,
    pub fields: SmallVec<[FormField; 5]>,
}

impl PropertyForm {
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.field(id).map(|f| f.value.as_str())
    }
}

/// Values submitted from a rendered form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: impl Into<String>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: impl Into<String>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ─── Pre-fill helpers ────────────────────────────────────────────────────

/// Leading integer of a CSS length, falling back when absent or zero
/// (the `parseInt(v) || default` rule).
pub fn int_or(value: Option<&str>, default: i64) -> String {
    value
        .and_then(parse_leading_int)
        .filter(|n| *n != 0)
        .unwrap_or(default)
        .to_string()
}

/// Hex swatch of a CSS color, falling back when it cannot be converted.
pub fn hex_or(value: Option<&str>, default: &str) -> String {
    value
        .and_then(color_to_hex)
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_or_falls_back_on_missing_and_zero() {
        assert_eq!(int_or(Some("20px"), 16), "20");
        assert_eq!(int_or(Some("0px"), 6), "6");
        assert_eq!(int_or(Some("auto"), 200), "200");
        assert_eq!(int_or(None, 2), "2");
    }

    #[test]
    fn hex_or_falls_back_on_named_colors() {
        assert_eq!(hex_or(Some("white"), "#ffffff"), "#ffffff");
        assert_eq!(hex_or(Some("rgb(255, 0, 0)"), "#000000"), "#ff0000");
        assert_eq!(hex_or(None, "#e2e8f0"), "#e2e8f0");
    }

    #[test]
    fn form_values_collect_from_pairs() {
        let values: FormValues = [("fontSize", "20"), ("textColor", "#000000")]
            .into_iter()
            .collect();
        assert_eq!(values.get("fontSize"), Some("20"));
        assert_eq!(values.get("missing"), None);
    }
}
