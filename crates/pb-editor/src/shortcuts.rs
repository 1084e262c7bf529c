//! Keyboard shortcut mapping.
//!
//! The builder has exactly two shortcuts: Delete removes the selected
//! element and Escape deselects. Modifiers are not consulted.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Remove the selected element (no-op without a selection).
    Delete,
    /// Clear the selection, whether or not there is one.
    Deselect,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Deselect => "deselect",
        }
    }
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"Delete"`).
    /// Returns `None` if the key has no binding.
    pub fn resolve(key: &str) -> Option<ShortcutAction> {
        match key {
            "Delete" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}
