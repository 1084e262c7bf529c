//! Canvas store: the ordered list of placed elements.
//!
//! Order is insertion order, which is also paint order and export order.
//! There is no reordering operation. Structural changes go through
//! `CanvasMutation` so tools can describe edits without owning the store.

use crate::error::{Error, Result};
use crate::id::{ElementId, IdAllocator};
use crate::model::{ElementKind, PlacedElement};
use kurbo::Point;

/// An edit to the canvas, produced by tools and applied by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMutation {
    /// Create an element of `kind` with its top-left at `at`.
    Insert { kind: ElementKind, at: Point },
    /// Set an element's position (already clamped by the caller).
    MoveElement { id: ElementId, to: Point },
    Remove { id: ElementId },
    Clear,
}

#[derive(Debug, Default, Clone)]
pub struct Canvas {
    elements: Vec<PlacedElement>,
    ids: IdAllocator,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element factory: build a `kind` element with defaults at `at`,
    /// append it, and return its fresh id.
    pub fn create(&mut self, kind: ElementKind, at: Point) -> ElementId {
        let id = self.ids.next_id();
        log::debug!("create {kind} {id} at ({}, {})", at.x, at.y);
        self.elements.push(PlacedElement::new(id, kind, at));
        id
    }

    /// Remove by identity. Removing a non-member is a no-op returning `None`.
    pub fn remove(&mut self, id: ElementId) -> Option<PlacedElement> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        log::debug!("remove {id}");
        Some(self.elements.remove(pos))
    }

    /// Remove every element. Returns how many were removed.
    /// The id counter keeps running.
    pub fn clear(&mut self) -> usize {
        let n = self.elements.len();
        self.elements.clear();
        log::debug!("clear canvas ({n} elements)");
        n
    }

    /// Apply a mutation. Returns the element it touched, or `None` when it
    /// was a no-op or touched no single element (`Clear`).
    pub fn apply(&mut self, mutation: CanvasMutation) -> Option<ElementId> {
        match mutation {
            CanvasMutation::Insert { kind, at } => Some(self.create(kind, at)),
            CanvasMutation::MoveElement { id, to } => {
                let element = self.get_mut(id).ok()?;
                log::trace!("move {id} to ({}, {})", to.x, to.y);
                element.position = to;
                Some(id)
            }
            CanvasMutation::Remove { id } => self.remove(id).map(|e| e.id),
            CanvasMutation::Clear => {
                self.clear();
                None
            }
        }
    }

    pub fn get(&self, id: ElementId) -> Result<&PlacedElement> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .ok_or(Error::UnknownElement(id))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut PlacedElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::UnknownElement(id))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Drives the empty-state placeholder.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(|e| e.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_never_reused() {
        let mut canvas = Canvas::new();
        let a = canvas.create(ElementKind::Text, Point::ZERO);
        canvas.remove(a);
        canvas.clear();
        let b = canvas.create(ElementKind::Text, Point::ZERO);
        assert_eq!(a.as_str(), "element-1");
        assert_eq!(b.as_str(), "element-2");
    }

    #[test]
    fn removing_a_non_member_is_a_noop() {
        let mut canvas = Canvas::new();
        canvas.create(ElementKind::Divider, Point::ZERO);
        assert!(canvas.remove(ElementId::intern("element-999")).is_none());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn n_adds_then_n_removes_leaves_empty() {
        let mut canvas = Canvas::new();
        let ids: Vec<_> = ElementKind::ALL
            .iter()
            .map(|k| canvas.create(*k, Point::new(5.0, 5.0)))
            .collect();
        assert!(!canvas.is_empty());
        for id in [ids[3], ids[0], ids[4], ids[1], ids[2]] {
            assert!(canvas.remove(id).is_some());
        }
        assert!(canvas.is_empty());
    }

    #[test]
    fn apply_move_and_remove() {
        let mut canvas = Canvas::new();
        let id = canvas
            .apply(CanvasMutation::Insert {
                kind: ElementKind::Button,
                at: Point::new(1.0, 2.0),
            })
            .unwrap();
        canvas.apply(CanvasMutation::MoveElement {
            id,
            to: Point::new(30.0, 40.0),
        });
        assert_eq!(canvas.get(id).unwrap().position, Point::new(30.0, 40.0));
        assert_eq!(canvas.apply(CanvasMutation::Remove { id }), Some(id));
        assert_eq!(canvas.apply(CanvasMutation::Remove { id }), None);
        assert_eq!(canvas.get(id), Err(Error::UnknownElement(id)));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut canvas = Canvas::new();
        let a = canvas.create(ElementKind::Heading, Point::ZERO);
        let b = canvas.create(ElementKind::Text, Point::ZERO);
        let c = canvas.create(ElementKind::Image, Point::ZERO);
        canvas.remove(b);
        assert_eq!(canvas.ids().collect::<Vec<_>>(), vec![a, c]);
    }
}
