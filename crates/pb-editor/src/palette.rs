//! Palette → canvas drops.
//!
//! The drag payload is a single type tag. The drop position is the
//! pointer's client position minus the canvas's bounding-box origin, and
//! it is not clamped: an element may be created partly outside the canvas.

use pb_core::{CanvasMutation, ElementKind, Point};

/// Canvas-relative drop position.
pub fn drop_position(client: Point, canvas_origin: Point) -> Point {
    (client - canvas_origin).to_point()
}

/// Translate a drop into an insert. Unknown or empty payloads produce
/// nothing.
pub fn resolve_drop(payload: &str, client: Point, canvas_origin: Point) -> Option<CanvasMutation> {
    let kind = match payload.parse::<ElementKind>() {
        Ok(kind) => kind,
        Err(err) => {
            log::debug!("ignoring drop: {err}");
            return None;
        }
    };
    Some(CanvasMutation::Insert {
        kind,
        at: drop_position(client, canvas_origin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_is_relative_to_canvas_origin() {
        let m = resolve_drop("heading", Point::new(350.0, 220.0), Point::new(300.0, 100.0));
        assert_eq!(
            m,
            Some(CanvasMutation::Insert {
                kind: ElementKind::Heading,
                at: Point::new(50.0, 120.0)
            })
        );
    }

    #[test]
    fn drop_is_not_clamped() {
        let m = resolve_drop("text", Point::new(10.0, 10.0), Point::new(40.0, 40.0));
        assert_eq!(
            m,
            Some(CanvasMutation::Insert {
                kind: ElementKind::Text,
                at: Point::new(-30.0, -30.0)
            })
        );
    }

    #[test]
    fn unknown_payload_is_ignored() {
        assert_eq!(resolve_drop("video", Point::ZERO, Point::ZERO), None);
        assert_eq!(resolve_drop("", Point::ZERO, Point::ZERO), None);
    }
}
