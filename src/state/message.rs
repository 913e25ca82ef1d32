//! Messages driving the state machine.

use crate::client::Completion;
use crate::model::BookId;
use crate::state::add_flow::AddMode;
use crate::state::app_state::Route;

/// Every event the state machine reacts to: user intent, viewport changes
/// and network completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Screens
    /// Switch screens.
    Navigate(Route),
    /// Show or hide help.
    ToggleHelp,
    /// Terminal width changed.
    Resize(u16),

    // Book list
    /// Move the list cursor up.
    CursorUp,
    /// Move the list cursor down.
    CursorDown,
    /// Jump to the first row.
    CursorFirst,
    /// Jump to the last row.
    CursorLast,
    /// Open the highlighted book.
    PickHighlighted,
    /// Open a specific book.
    Pick(BookId),
    /// Refetch the catalog.
    Reload,

    // Overlays
    /// Open the edit panel for the viewed book.
    OpenEdit,
    /// Cancel editing.
    CloseEdit,
    /// Submit the edit form.
    SaveEdit,
    /// Delete the viewed book.
    RequestDelete,
    /// Answer the delete prompt.
    ConfirmDelete(bool),
    /// Open the add panel.
    OpenAdd,
    /// Switch add tab.
    SetAddMode(AddMode),
    /// Next add tab.
    CycleAddMode,
    /// Submit the manual form.
    SubmitManual,
    /// Look up the typed ISBN.
    SubmitSearch,
    /// Add the search hit.
    AddFoundBook,
    /// Close the add panel.
    Close,

    // Form editing
    /// Type a character.
    Input(char),
    /// Delete before the cursor.
    Backspace,
    /// Move the field cursor left.
    CursorLeft,
    /// Move the field cursor right.
    CursorRight,
    /// Focus the next field.
    NextField,
    /// Focus the previous field.
    PrevField,
    /// Flip the read checkbox.
    ToggleRead,

    // Network
    /// A request finished.
    Completed(Completion),
}

impl Msg {
    /// Whether the message comes from the user (as opposed to the network
    /// or the terminal).
    pub fn is_user_action(&self) -> bool {
        !matches!(self, Msg::Completed(_) | Msg::Resize(_))
    }
}
