//! Library view state and transitions.
//!
//! `LibraryState` owns the catalog as last loaded, the selection and the
//! overlay state machine. All transitions are pure: [`LibraryState::update`]
//! takes a [`Msg`] and returns the [`Request`]s the shell must execute.
//!
//! # Overlay state machine
//!
//! ```text
//! Idle ──pick──▶ Viewing ──edit──▶ Editing ──cancel──▶ Viewing (if still listed)
//!  ▲                │                 └──save ok──▶ Idle
//!  │                └──delete──▶ ConfirmDelete ──yes, ok──▶ Idle
//!  │                                   └──no──▶ Viewing
//!  └──────────── close / Adding ◀──open add── any
//! ```
//!
//! Exactly one overlay value exists at a time, so opening one closes the
//! others. Layout (modal vs. shelf) is tracked separately and never changes
//! the overlay.

use crate::client::{Completion, Outcome, Request, Ticket};
use crate::model::{Book, BookId, CatalogError, Isbn, SearchError, SearchResult};
use crate::state::add_flow::{AddMode, AddState, PendingAdd};
use crate::state::form::BookForm;
use crate::state::message::Msg;
use tracing::{debug, warn};

/// Default width (columns) at or below which overlays render as shelves.
pub const DEFAULT_SHELF_BREAKPOINT: u16 = 80;

// ===== LayoutMode =====

/// Presentation variant of overlays, derived from terminal width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Centered modal dialogs.
    #[default]
    Wide,
    /// Edge-anchored shelves.
    Narrow,
}

impl LayoutMode {
    /// `Narrow` when `width <= breakpoint`.
    pub fn from_width(width: u16, breakpoint: u16) -> Self {
        if width <= breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

// ===== Overlay =====

/// Edit panel state: target id plus a local form copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    /// Book being edited.
    pub id: BookId,
    /// Uncommitted field values.
    pub form: BookForm,
    /// Save in flight, if any.
    pub pending: Option<Ticket>,
}

/// Delete confirmation gate.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteState {
    /// Book to delete.
    pub id: BookId,
    /// Delete in flight, if any.
    pub pending: Option<Ticket>,
}

/// The single open overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    /// Nothing open.
    #[default]
    Idle,
    /// Detail shelf for a book.
    Viewing(BookId),
    /// Edit panel.
    Editing(EditState),
    /// Add panel.
    Adding(AddState),
    /// Delete confirmation.
    ConfirmDelete(DeleteState),
}

/// Overlay discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Nothing open.
    Idle,
    /// Detail shelf.
    Viewing,
    /// Edit panel.
    Editing,
    /// Add panel.
    Adding,
    /// Delete confirmation.
    ConfirmDelete,
}

impl Overlay {
    /// Discriminant of this overlay.
    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::Idle => OverlayKind::Idle,
            Overlay::Viewing(_) => OverlayKind::Viewing,
            Overlay::Editing(_) => OverlayKind::Editing,
            Overlay::Adding(_) => OverlayKind::Adding,
            Overlay::ConfirmDelete(_) => OverlayKind::ConfirmDelete,
        }
    }

    /// Whether anything is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::Idle)
    }
}

/// The concrete panel drawn for the current overlay and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Book details, always a shelf.
    ViewShelf,
    /// Centered edit dialog.
    EditModal,
    /// Edit form docked as a shelf.
    EditShelf,
    /// Centered add dialog.
    AddModal,
    /// Add panel docked as a shelf.
    AddShelf,
    /// Yes/no delete prompt.
    ConfirmDialog,
}

// ===== Notice =====

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Success message.
    Info,
    /// Failure message.
    Error,
}

/// One-line banner in the status bar. Cleared by the next user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown.
    pub text: String,
}

impl Notice {
    /// Success notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    /// Failure notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

// ===== LibraryOptions =====

/// Settings the library view is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryOptions {
    /// Widths at or below this render overlays as shelves.
    pub shelf_breakpoint: u16,
    /// Ask before deleting.
    pub confirm_delete: bool,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            shelf_breakpoint: DEFAULT_SHELF_BREAKPOINT,
            confirm_delete: true,
        }
    }
}

// ===== LibraryState =====

/// Library view state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct LibraryState {
    options: LibraryOptions,
    books: Vec<Book>,
    loading: bool,
    layout: LayoutMode,
    /// Viewed entry. Kept while editing so cancel can return to it.
    selected: Option<BookId>,
    overlay: Overlay,
    /// Highlighted row in the book list.
    cursor: usize,
    notice: Option<Notice>,
    /// One-shot request to focus the first input of a freshly opened form.
    focus_request: bool,
    next_ticket: u64,
    /// Newest catalog load; older completions are ignored.
    pending_load: Option<Ticket>,
}

impl LibraryState {
    /// Empty library, nothing loaded yet.
    pub fn new(options: LibraryOptions) -> Self {
        Self {
            options,
            books: Vec::new(),
            loading: false,
            layout: LayoutMode::default(),
            selected: None,
            overlay: Overlay::Idle,
            cursor: 0,
            notice: None,
            focus_request: false,
            next_ticket: 1,
            pending_load: None,
        }
    }

    // ===== Accessors =====

    /// Catalog in backend order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Whether a catalog load is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Current layout mode.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Options the view was built with.
    pub fn options(&self) -> LibraryOptions {
        self.options
    }

    /// Selected book id.
    pub fn selected(&self) -> Option<BookId> {
        self.selected
    }

    /// Open overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether a fresh form asks for focus.
    pub fn focus_requested(&self) -> bool {
        self.focus_request
    }

    /// Book with the given id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Selected book, if still listed.
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|id| self.book(id))
    }

    /// Book under the list cursor.
    pub fn highlighted_book(&self) -> Option<&Book> {
        self.books.get(self.cursor)
    }

    /// Add panel state, when open.
    pub fn adding(&self) -> Option<&AddState> {
        match &self.overlay {
            Overlay::Adding(add) => Some(add),
            _ => None,
        }
    }

    /// Edit panel state, when open.
    pub fn editing(&self) -> Option<&EditState> {
        match &self.overlay {
            Overlay::Editing(edit) => Some(edit),
            _ => None,
        }
    }

    /// Which panel to draw, if any.
    ///
    /// The view shelf and the confirmation dialog look the same in both
    /// layouts; edit and add switch between modal and shelf.
    pub fn visible_panel(&self) -> Option<Panel> {
        let narrow = self.layout == LayoutMode::Narrow;
        match self.overlay {
            Overlay::Idle => None,
            Overlay::Viewing(_) => Some(Panel::ViewShelf),
            Overlay::Editing(_) if narrow => Some(Panel::EditShelf),
            Overlay::Editing(_) => Some(Panel::EditModal),
            Overlay::Adding(_) if narrow => Some(Panel::AddShelf),
            Overlay::Adding(_) => Some(Panel::AddModal),
            Overlay::ConfirmDelete(_) => Some(Panel::ConfirmDialog),
        }
    }

    /// Whether printable keys should go to a text field.
    pub fn is_text_entry(&self) -> bool {
        match &self.overlay {
            Overlay::Editing(_) => true,
            Overlay::Adding(add) => add.mode != AddMode::Bulk,
            _ => false,
        }
    }

    // ===== Lifecycle =====

    /// Start a full catalog reload.
    pub fn begin_load(&mut self) -> Request {
        let ticket = self.issue_ticket();
        self.pending_load = Some(ticket);
        self.loading = true;
        debug!(ticket = ticket.0, "Loading catalog");
        Request::LoadCatalog { ticket }
    }

    /// Drop all view state, as when leaving the library screen.
    ///
    /// Keeps layout, options and the ticket counter so completions for
    /// requests issued before the reset stay recognisably stale.
    pub fn reset(&mut self) {
        let next_ticket = self.next_ticket;
        let layout = self.layout;
        *self = Self::new(self.options);
        self.next_ticket = next_ticket;
        self.layout = layout;
    }

    /// Apply a pending focus request to the open form.
    ///
    /// Called by the renderer once the form is on screen. Returns whether a
    /// request was consumed.
    pub fn apply_focus_request(&mut self) -> bool {
        if !std::mem::take(&mut self.focus_request) {
            return false;
        }
        match &mut self.overlay {
            Overlay::Editing(edit) => edit.form.focus_first(),
            Overlay::Adding(add) => add.focus_first_input(),
            _ => {}
        }
        true
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    // ===== Update =====

    /// Apply a message and return the requests to execute.
    pub fn update(&mut self, msg: Msg) -> Vec<Request> {
        if msg.is_user_action() {
            self.notice = None;
        }

        match msg {
            Msg::Resize(width) => {
                self.resize(width);
                Vec::new()
            }
            Msg::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            Msg::CursorDown => {
                if !self.books.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.books.len() - 1);
                }
                Vec::new()
            }
            Msg::CursorFirst => {
                self.cursor = 0;
                Vec::new()
            }
            Msg::CursorLast => {
                self.cursor = self.books.len().saturating_sub(1);
                Vec::new()
            }
            Msg::PickHighlighted => {
                if let Some(id) = self.highlighted_book().map(|b| b.id) {
                    self.pick(id);
                }
                Vec::new()
            }
            Msg::Pick(id) => {
                self.pick(id);
                Vec::new()
            }
            Msg::Reload => vec![self.begin_load()],
            Msg::OpenEdit => {
                self.open_edit();
                Vec::new()
            }
            Msg::CloseEdit => {
                self.close_edit();
                Vec::new()
            }
            Msg::SaveEdit => self.save_edit().into_iter().collect(),
            Msg::RequestDelete => self.request_delete().into_iter().collect(),
            Msg::ConfirmDelete(confirmed) => self.confirm_delete(confirmed).into_iter().collect(),
            Msg::OpenAdd => {
                self.open_add();
                Vec::new()
            }
            Msg::SetAddMode(mode) => {
                if let Some(add) = self.adding_mut() {
                    add.set_mode(mode);
                }
                Vec::new()
            }
            Msg::CycleAddMode => {
                if let Some(add) = self.adding_mut() {
                    add.set_mode(add.mode.next());
                }
                Vec::new()
            }
            Msg::SubmitManual => self.submit_manual().into_iter().collect(),
            Msg::SubmitSearch => self.submit_search().into_iter().collect(),
            Msg::AddFoundBook => self.add_found_book().into_iter().collect(),
            Msg::Close => {
                self.close();
                Vec::new()
            }
            Msg::Input(ch) => {
                if let Some(form) = self.text_form_mut() {
                    form.input(ch);
                }
                Vec::new()
            }
            Msg::Backspace => {
                if let Some(form) = self.text_form_mut() {
                    form.backspace();
                }
                Vec::new()
            }
            Msg::CursorLeft => {
                if let Some(form) = self.text_form_mut() {
                    form.cursor_left();
                }
                Vec::new()
            }
            Msg::CursorRight => {
                if let Some(form) = self.text_form_mut() {
                    form.cursor_right();
                }
                Vec::new()
            }
            Msg::NextField => {
                if let Some(form) = self.full_form_mut() {
                    form.next_field();
                }
                Vec::new()
            }
            Msg::PrevField => {
                if let Some(form) = self.full_form_mut() {
                    form.prev_field();
                }
                Vec::new()
            }
            Msg::ToggleRead => {
                if let Some(form) = self.full_form_mut() {
                    form.toggle_read();
                }
                Vec::new()
            }
            Msg::Completed(completion) => self.apply_completion(completion),
            // Screen-level messages are handled by AppState
            Msg::Navigate(_) | Msg::ToggleHelp => Vec::new(),
        }
    }

    // ===== Transitions =====

    fn resize(&mut self, width: u16) {
        let layout = LayoutMode::from_width(width, self.options.shelf_breakpoint);
        if layout != self.layout {
            debug!(?layout, width, "Layout changed");
            self.layout = layout;
        }
    }

    /// Close everything, then view `id`.
    fn pick(&mut self, id: BookId) {
        let Some(index) = self.books.iter().position(|b| b.id == id) else {
            debug!(%id, "Ignoring pick of unlisted book");
            return;
        };
        self.close();
        self.selected = Some(id);
        self.overlay = Overlay::Viewing(id);
        self.cursor = index;
        debug!(%id, "Viewing book");
    }

    /// Back to `Idle`, dropping selection and any drafts.
    fn close(&mut self) {
        self.overlay = Overlay::Idle;
        self.selected = None;
        self.focus_request = false;
    }

    fn open_edit(&mut self) {
        let Overlay::Viewing(id) = self.overlay else {
            return;
        };
        let Some(book) = self.book(id) else {
            return;
        };
        let form = BookForm::from_book(book);
        self.overlay = Overlay::Editing(EditState {
            id,
            form,
            pending: None,
        });
        self.focus_request = self.layout == LayoutMode::Narrow;
        debug!(%id, "Editing book");
    }

    fn close_edit(&mut self) {
        if !matches!(self.overlay, Overlay::Editing(_)) {
            return;
        }
        self.focus_request = false;
        self.overlay = match self.selected {
            Some(id) if self.book(id).is_some() => Overlay::Viewing(id),
            _ => {
                self.selected = None;
                Overlay::Idle
            }
        };
    }

    fn save_edit(&mut self) -> Option<Request> {
        if !matches!(self.overlay, Overlay::Editing(_)) {
            return None;
        }
        let ticket = self.issue_ticket();
        let Overlay::Editing(edit) = &mut self.overlay else {
            return None;
        };
        edit.pending = Some(ticket);
        debug!(id = %edit.id, ticket = ticket.0, "Saving book");
        Some(Request::Update {
            ticket,
            id: edit.id,
            draft: edit.form.to_draft(),
        })
    }

    fn request_delete(&mut self) -> Option<Request> {
        let Overlay::Viewing(id) = self.overlay else {
            return None;
        };
        if self.options.confirm_delete {
            self.overlay = Overlay::ConfirmDelete(DeleteState { id, pending: None });
            return None;
        }
        let ticket = self.issue_ticket();
        self.overlay = Overlay::ConfirmDelete(DeleteState {
            id,
            pending: Some(ticket),
        });
        Some(Request::Delete { ticket, id })
    }

    fn confirm_delete(&mut self, confirmed: bool) -> Option<Request> {
        let Overlay::ConfirmDelete(DeleteState { id, pending }) = self.overlay else {
            return None;
        };

        // Once sent, the delete can no longer be declined
        if pending.is_some() {
            return None;
        }

        if !confirmed {
            debug!(%id, "Delete declined");
            self.overlay = if self.book(id).is_some() {
                Overlay::Viewing(id)
            } else {
                self.selected = None;
                Overlay::Idle
            };
            return None;
        }

        let ticket = self.issue_ticket();
        self.overlay = Overlay::ConfirmDelete(DeleteState {
            id,
            pending: Some(ticket),
        });
        debug!(%id, ticket = ticket.0, "Deleting book");
        Some(Request::Delete { ticket, id })
    }

    fn open_add(&mut self) {
        self.close();
        self.overlay = Overlay::Adding(AddState::new());
        self.focus_request = self.layout == LayoutMode::Narrow;
        debug!("Adding book");
    }

    fn submit_manual(&mut self) -> Option<Request> {
        if !matches!(self.adding(), Some(add) if add.mode == AddMode::Manual) {
            return None;
        }
        let ticket = self.issue_ticket();
        let add = self.adding_mut()?;
        add.pending = Some(PendingAdd::Manual(ticket));
        Some(Request::Create {
            ticket,
            draft: add.draft.to_draft(),
        })
    }

    fn submit_search(&mut self) -> Option<Request> {
        if !matches!(self.adding(), Some(add) if add.mode == AddMode::Search) {
            return None;
        }
        let ticket = self.issue_ticket();
        let add = self.adding_mut()?;
        add.clear_search();
        add.pending = None;

        let Some(isbn) = Isbn::parse(add.draft.isbn.value()) else {
            add.search_error = Some(SearchError::InvalidIsbn.to_string());
            return None;
        };

        add.pending = Some(PendingAdd::Search(ticket, isbn.clone()));
        debug!(%isbn, ticket = ticket.0, "Searching ISBN");
        Some(Request::Search { ticket, isbn })
    }

    fn add_found_book(&mut self) -> Option<Request> {
        let draft = match self.adding() {
            Some(add) if add.can_add_found() => add.search_result.as_ref()?.to_draft(),
            _ => return None,
        };
        let ticket = self.issue_ticket();
        let add = self.adding_mut()?;
        add.pending = Some(PendingAdd::FoundBook(ticket));
        Some(Request::Create { ticket, draft })
    }

    fn adding_mut(&mut self) -> Option<&mut AddState> {
        match &mut self.overlay {
            Overlay::Adding(add) => Some(add),
            _ => None,
        }
    }

    /// Form receiving text keys. The search tab only edits the ISBN.
    fn text_form_mut(&mut self) -> Option<&mut BookForm> {
        match &mut self.overlay {
            Overlay::Editing(edit) => Some(&mut edit.form),
            Overlay::Adding(add) => match add.mode {
                AddMode::Search => {
                    add.draft.focus_field(crate::state::form::FormField::Isbn);
                    Some(&mut add.draft)
                }
                AddMode::Manual => Some(&mut add.draft),
                AddMode::Bulk => None,
            },
            _ => None,
        }
    }

    /// Form with every field navigable: edit panel or manual tab.
    fn full_form_mut(&mut self) -> Option<&mut BookForm> {
        match &mut self.overlay {
            Overlay::Editing(edit) => Some(&mut edit.form),
            Overlay::Adding(add) if add.mode == AddMode::Manual => Some(&mut add.draft),
            _ => None,
        }
    }

    // ===== Completions =====

    fn apply_completion(&mut self, completion: Completion) -> Vec<Request> {
        let Completion { ticket, outcome } = completion;
        match outcome {
            Outcome::Loaded(result) => {
                self.apply_loaded(ticket, result);
                Vec::new()
            }
            Outcome::Updated(result) => self.apply_updated(ticket, result),
            Outcome::Deleted(result) => self.apply_deleted(ticket, result),
            Outcome::Created(result) => self.apply_created(ticket, result),
            Outcome::Searched(result) => {
                self.apply_searched(ticket, result);
                Vec::new()
            }
        }
    }

    fn apply_loaded(&mut self, ticket: Ticket, result: Result<Vec<Book>, CatalogError>) {
        if self.pending_load != Some(ticket) {
            debug!(ticket = ticket.0, "Ignoring stale catalog load");
            return;
        }
        self.pending_load = None;
        self.loading = false;

        match result {
            Ok(books) => {
                debug!(count = books.len(), "Catalog loaded");
                self.books = books;
                self.revalidate_selection();
            }
            Err(err) => {
                warn!(error = %err, "Catalog load failed");
                self.notice = Some(Notice::error(format!("Failed to load books: {err}")));
            }
        }
    }

    /// Drop selection and overlays that reference books no longer listed.
    fn revalidate_selection(&mut self) {
        let listed = |id: BookId| self.books.iter().any(|b| b.id == id);

        if self.selected.is_some_and(|id| !listed(id)) {
            self.selected = None;
        }

        let stale = match &self.overlay {
            Overlay::Viewing(id) => !listed(*id),
            Overlay::Editing(edit) => !listed(edit.id),
            Overlay::ConfirmDelete(delete) => !listed(delete.id),
            Overlay::Idle | Overlay::Adding(_) => false,
        };
        if stale {
            debug!("Selected book disappeared, closing overlay");
            self.overlay = Overlay::Idle;
            self.selected = None;
            self.focus_request = false;
        }

        self.cursor = self.cursor.min(self.books.len().saturating_sub(1));
    }

    fn apply_updated(&mut self, ticket: Ticket, result: Result<(), CatalogError>) -> Vec<Request> {
        let current = matches!(&self.overlay, Overlay::Editing(edit) if edit.pending == Some(ticket));

        match result {
            Ok(()) => {
                if current {
                    self.close();
                    self.notice = Some(Notice::info("Book saved"));
                }
                vec![self.begin_load()]
            }
            Err(err) => {
                warn!(error = %err, ticket = ticket.0, current, "Update failed");
                if current {
                    if let Overlay::Editing(edit) = &mut self.overlay {
                        edit.pending = None;
                    }
                }
                self.notice = Some(Notice::error(format!("Failed to save book: {err}")));
                Vec::new()
            }
        }
    }

    fn apply_deleted(&mut self, ticket: Ticket, result: Result<(), CatalogError>) -> Vec<Request> {
        let current_id = match &self.overlay {
            Overlay::ConfirmDelete(delete) if delete.pending == Some(ticket) => Some(delete.id),
            _ => None,
        };

        match result {
            Ok(()) => {
                if current_id.is_some() {
                    self.close();
                    self.notice = Some(Notice::info("Book deleted"));
                }
                vec![self.begin_load()]
            }
            Err(err) => {
                warn!(error = %err, ticket = ticket.0, "Delete failed");
                if let Some(id) = current_id {
                    self.overlay = Overlay::Viewing(id);
                }
                self.notice = Some(Notice::error(format!("Failed to delete book: {err}")));
                Vec::new()
            }
        }
    }

    fn apply_created(&mut self, ticket: Ticket, result: Result<(), CatalogError>) -> Vec<Request> {
        let pending = self.adding().and_then(|add| add.pending.clone());

        match (pending, result) {
            (Some(PendingAdd::Manual(t)), Ok(())) if t == ticket => {
                self.close();
                self.notice = Some(Notice::info("Book added"));
                vec![self.begin_load()]
            }
            (Some(PendingAdd::FoundBook(t)), Ok(())) if t == ticket => {
                // The add panel stays open so the user can keep searching
                if let Some(add) = self.adding_mut() {
                    add.pending = None;
                    add.added = true;
                }
                vec![self.begin_load()]
            }
            (_, Ok(())) => vec![self.begin_load()],
            (Some(PendingAdd::Manual(t)), Err(err)) if t == ticket => {
                warn!(error = %err, "Create failed");
                if let Some(add) = self.adding_mut() {
                    add.pending = None;
                }
                self.notice = Some(Notice::error(format!("Failed to add book: {err}")));
                Vec::new()
            }
            (Some(PendingAdd::FoundBook(t)), Err(err)) if t == ticket => {
                warn!(error = %err, "Create from search result failed");
                if let Some(add) = self.adding_mut() {
                    add.pending = None;
                    add.search_error = Some("Failed to add book".to_string());
                }
                Vec::new()
            }
            (_, Err(err)) => {
                warn!(error = %err, ticket = ticket.0, "Create failed after its panel closed");
                self.notice = Some(Notice::error(format!("Failed to add book: {err}")));
                Vec::new()
            }
        }
    }

    fn apply_searched(&mut self, ticket: Ticket, result: Result<SearchResult, SearchError>) {
        let Overlay::Adding(add) = &mut self.overlay else {
            debug!(ticket = ticket.0, "Ignoring search result for closed panel");
            return;
        };
        let isbn = match &add.pending {
            Some(PendingAdd::Search(t, isbn)) if *t == ticket => isbn.clone(),
            _ => {
                debug!(ticket = ticket.0, "Ignoring stale search result");
                return;
            }
        };
        add.pending = None;

        match result {
            Ok(found) => {
                add.added = self.books.iter().any(|b| isbn.matches(&b.isbn));
                add.search_result = Some(found);
            }
            Err(err) => {
                debug!(error = %err, "ISBN search unsuccessful");
                add.search_error = Some(err.to_string());
            }
        }
    }
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(LibraryOptions::default())
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
