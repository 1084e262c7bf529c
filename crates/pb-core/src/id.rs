use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for element IDs: fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Prefix shared by every generated element ID (`element-1`, `element-2`, ...).
pub const ELEMENT_ID_PREFIX: &str = "element";

/// A lightweight, interned identifier for placed elements.
/// Internally a `Spur` index: 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Intern a string as an ElementId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        ElementId(INTERNER.get_or_intern(s))
    }

    /// Look up an already-interned ID without interning a new string.
    /// Used when the host hands back IDs it read from the DOM.
    pub fn lookup(s: &str) -> Option<Self> {
        INTERNER.get(s).map(ElementId)
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::intern(&s))
    }
}

/// Monotonic `element-<n>` generator owned by one canvas.
///
/// Numbers start at 1 and are never handed out twice, even after the
/// element they named has been deleted or the canvas cleared.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    counter: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ElementId {
        self.counter += 1;
        ElementId::intern(&format!("{ELEMENT_ID_PREFIX}-{}", self.counter))
    }

    /// How many IDs have been issued so far.
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ElementId::intern("element-42");
        let b = ElementId::intern("element-42");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "element-42");
    }

    #[test]
    fn allocator_counts_from_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id().as_str(), "element-1");
        assert_eq!(ids.next_id().as_str(), "element-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn lookup_does_not_intern() {
        assert!(ElementId::lookup("never-seen-before-id").is_none());
        let id = ElementId::intern("seen-id");
        assert_eq!(ElementId::lookup("seen-id"), Some(id));
    }
}
