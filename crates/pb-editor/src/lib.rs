pub mod editor;
pub mod hit;
pub mod host;
pub mod input;
pub mod palette;
pub mod panel;
pub mod selection;
pub mod shortcuts;
pub mod tools;

pub use editor::Editor;
pub use host::{ConfirmPrompt, FileSaver, HostError};
pub use input::InputEvent;
pub use panel::{PanelState, PropertyPanel};
pub use selection::Selection;
pub use shortcuts::{ShortcutAction, ShortcutMap};
