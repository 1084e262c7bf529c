//! Single-element selection.
//!
//! At most one element is selected. The editor keeps the selection
//! consistent with the canvas: anything removed from the canvas is
//! deselected before the removal completes.

use pb_core::ElementId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.current == Some(id)
    }

    /// Select `id`, replacing any previous selection in one step.
    /// Returns the element that lost its marker, if a different one had it.
    pub fn select(&mut self, id: ElementId) -> Option<ElementId> {
        let previous = self.current.replace(id);
        previous.filter(|prev| *prev != id)
    }

    /// Clear the selection. Returns what was selected.
    pub fn clear(&mut self) -> Option<ElementId> {
        self.current.take()
    }
}
