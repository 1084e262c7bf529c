//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and focus events into a unified `InputEvent`
//! enum consumed by tools. Coordinates are canvas-relative pixels.

use pb_core::Point;

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, or a synthesized touch start).
    PointerDown { at: Point },

    /// Pointer moved.
    PointerMove { at: Point },

    /// Pointer released.
    PointerUp { at: Point },

    /// The gesture was interrupted (window blur, pointer cancel).
    Cancel,

    /// Key pressed, as `KeyboardEvent.key`.
    Key { key: String },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { at: Point::new(x, y) }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { at: Point::new(x, y) }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { at: Point::new(x, y) }
    }

    /// Touch and mouse share one code path: a touch start becomes the
    /// pointer-down of its first touch point. Extra touches are ignored.
    pub fn from_touch_start(touches: &[Point]) -> Option<Self> {
        touches.first().map(|&at| Self::PointerDown { at })
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { at } | Self::PointerMove { at } | Self::PointerUp { at } => {
                Some(*at)
            }
            _ => None,
        }
    }
}
