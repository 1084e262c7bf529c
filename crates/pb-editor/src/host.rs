//! Host collaborators the editor consumes as black boxes.
//!
//! The browser bridge implements these with `window.confirm` and a file
//! download; tests use closures and in-memory savers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("could not save {filename}: {reason}")]
    Save { filename: String, reason: String },
}

/// Blocking yes/no prompt shown before destructive actions.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Accepts a byte blob and a suggested filename for the user to keep.
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), HostError>;
}
