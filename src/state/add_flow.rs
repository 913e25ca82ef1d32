//! State of the add panel.
//!
//! Three tabs share one draft form:
//! - Search: look a book up by ISBN, then add the hit
//! - Manual: fill in every field by hand
//! - Bulk: placeholder, never touches the network

use crate::client::Ticket;
use crate::model::{Isbn, SearchResult};
use crate::state::form::{BookForm, FormField};

/// Active tab of the add panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AddMode {
    /// ISBN lookup.
    #[default]
    Search,
    /// Fill in every field by hand.
    Manual,
    /// Placeholder tab.
    Bulk,
}

impl AddMode {
    /// Tabs in display order.
    pub const ALL: [AddMode; 3] = [AddMode::Search, AddMode::Manual, AddMode::Bulk];

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            AddMode::Search => "Search",
            AddMode::Manual => "Manual",
            AddMode::Bulk => "Bulk",
        }
    }

    /// Tab to the right, wrapping.
    pub fn next(self) -> Self {
        match self {
            AddMode::Search => AddMode::Manual,
            AddMode::Manual => AddMode::Bulk,
            AddMode::Bulk => AddMode::Search,
        }
    }
}

/// What an in-flight request of the add panel was for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAdd {
    /// ISBN lookup, with the normalized ISBN that was sent.
    Search(Ticket, Isbn),
    /// Manual form submit.
    Manual(Ticket),
    /// Adding a search hit.
    FoundBook(Ticket),
}

/// Add panel state.
///
/// # Invariants
/// - `added` is only meaningful while `search_result` is `Some`
/// - switching tabs clears `search_error`, `search_result` and `added`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddState {
    /// Active tab.
    pub mode: AddMode,
    /// Draft shared by all tabs.
    pub draft: BookForm,
    /// Message shown under the search field.
    pub search_error: Option<String>,
    /// Last search hit.
    pub search_result: Option<SearchResult>,
    /// Whether the hit has been added.
    pub added: bool,
    /// Request in flight, if any.
    pub pending: Option<PendingAdd>,
}

impl AddState {
    /// Fresh panel: empty draft, Search tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an ISBN lookup is in flight ("Searching...").
    pub fn validating(&self) -> bool {
        matches!(self.pending, Some(PendingAdd::Search(..)))
    }

    /// Whether a create request is in flight.
    pub fn working(&self) -> bool {
        matches!(
            self.pending,
            Some(PendingAdd::Manual(_)) | Some(PendingAdd::FoundBook(_))
        )
    }

    /// Switch tab, dropping any search outcome and in-flight request.
    pub fn set_mode(&mut self, mode: AddMode) {
        self.mode = mode;
        self.clear_search();
        self.pending = None;
        if mode == AddMode::Search && self.draft.focus().is_some() {
            self.draft.focus_field(FormField::Isbn);
        }
    }

    /// Reset error, result and the added flag.
    pub fn clear_search(&mut self) {
        self.search_error = None;
        self.search_result = None;
        self.added = false;
    }

    /// Focus the tab's first input.
    pub fn focus_first_input(&mut self) {
        match self.mode {
            AddMode::Search => self.draft.focus_field(FormField::Isbn),
            AddMode::Manual => self.draft.focus_first(),
            AddMode::Bulk => {}
        }
    }

    /// Whether "+ Add" is available for the current hit.
    pub fn can_add_found(&self) -> bool {
        self.search_result.is_some() && !self.added
    }

    /// Ticket of the in-flight request, if any.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        match &self.pending {
            Some(PendingAdd::Search(ticket, _))
            | Some(PendingAdd::Manual(ticket))
            | Some(PendingAdd::FoundBook(ticket)) => Some(*ticket),
            None => None,
        }
    }
}
