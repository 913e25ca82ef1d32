//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod add_flow;
pub mod app_state;
pub mod form;
pub mod key_handler;
pub mod library;
pub mod message;

// Re-export for convenience
pub use add_flow::{AddMode, AddState, PendingAdd};
pub use app_state::{AppState, Route};
pub use form::{BookForm, FormField, TextInput};
pub use key_handler::{handle_key, KeyOutcome};
pub use library::{
    DeleteState, EditState, LayoutMode, LibraryOptions, LibraryState, Notice, NoticeLevel,
    Overlay, OverlayKind, Panel, DEFAULT_SHELF_BREAKPOINT,
};
pub use message::Msg;
