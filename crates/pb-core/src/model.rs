//! Element records placed on the canvas.
//!
//! The canvas is an ordered list of these records, not a tree of live
//! display nodes. Rendering (see `html`) is a pure function of the records,
//! so nothing ever reads state back out of the view.

use crate::css::InlineStyle;
use crate::error::Error;
use crate::id::ElementId;
use crate::kinds;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five element types the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Heading,
    Button,
    Image,
    Divider,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Text,
        ElementKind::Heading,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Divider,
    ];

    /// The drag-payload tag for this kind (`"text"`, `"heading"`, ...).
    pub fn as_str(self) -> &'static str {
        kinds::spec(self).tag
    }

    /// HTML tag of the single content child this kind renders.
    pub fn content_tag(self) -> &'static str {
        kinds::spec(self).content_tag
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        kinds::REGISTRY
            .iter()
            .find(|spec| spec.tag == s)
            .map(|spec| spec.kind)
            .ok_or_else(|| Error::UnknownElementKind(s.to_string()))
    }
}

/// What an element shows, independent of how it is styled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    /// Text, heading and button label.
    Text(String),
    Image { src: String, alt: String },
    /// Dividers carry no content.
    Empty,
}

/// One user-added block on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Top-left corner in pixels, relative to the canvas origin.
    pub position: Point,
    pub content: Content,
    /// Inline style of the content child.
    pub style: InlineStyle,
}

impl PlacedElement {
    /// Build an element with the kind's default content and style.
    /// The position is taken as given; drag bounds clamp it later.
    pub fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        let (content, style) = (kinds::spec(kind).defaults)();
        Self {
            id,
            kind,
            position,
            content,
            style,
        }
    }

    /// Text payload for text, heading and button elements.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Replace the text payload. No-op for kinds without text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Content::Text(current) = &mut self.content {
            *current = text.into();
        }
    }

    /// `(src, alt)` for image elements.
    pub fn image(&self) -> Option<(&str, &str)> {
        match &self.content {
            Content::Image { src, alt } => Some((src, alt)),
            _ => None,
        }
    }

    pub fn set_image_src(&mut self, value: impl Into<String>) {
        if let Content::Image { src, .. } = &mut self.content {
            *src = value.into();
        }
    }

    pub fn set_image_alt(&mut self, value: impl Into<String>) {
        if let Content::Image { alt, .. } = &mut self.content {
            *alt = value.into();
        }
    }
}
