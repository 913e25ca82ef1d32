//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to configurable key bindings.
///
/// These represent user intent outside of text entry. While a form field
/// has focus, printable keys are text and only the fixed form keys apply
/// (see `state::key_handler`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the list highlight up. Default: k/↑
    CursorUp,
    /// Move the list highlight down. Default: j/↓
    CursorDown,
    /// Jump to the first book. Default: g/Home
    CursorFirst,
    /// Jump to the last book. Default: G/End
    CursorLast,
    /// Open the highlighted book, or continue on Home/Login. Default: Enter
    Select,
    /// Open the add panel. Default: a
    OpenAdd,
    /// Edit the viewed book. Default: e
    OpenEdit,
    /// Delete the viewed book (asks first). Default: d
    Delete,
    /// Close the open overlay or go back a screen. Default: Esc
    Close,
    /// Reload the catalog from the backend. Default: r
    Reload,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q
    Quit,
}
