use crate::id::ElementId;
use thiserror::Error;

/// Errors surfaced by the element model.
///
/// Interactive callers treat every one of these as a silent no-op; they
/// exist so that the no-op is a decision made at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown element type: {0:?}")]
    UnknownElementKind(String),
    #[error("no element with id {0}")]
    UnknownElement(ElementId),
}

pub type Result<T> = std::result::Result<T, Error>;
