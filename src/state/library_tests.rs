//! Tests for LibraryState transitions.
//!
//! Pure state tests: requests are inspected, never executed.

use super::*;
use crate::state::form::FormField;

// ===== Test Helpers =====

fn book(id: i64, title: &str, isbn: &str) -> Book {
    let mut book = Book::new(BookId(id));
    book.title = title.to_string();
    book.author = "Author".to_string();
    book.isbn = isbn.to_string();
    book.genre = "Fiction".to_string();
    book
}

fn catalog() -> Vec<Book> {
    vec![
        book(1, "Dune", "978-0-441-17271-9"),
        book(2, "Emma", "9780141439587"),
        book(3, "Ulysses", ""),
    ]
}

/// State with the given books already loaded.
fn loaded_with(books: Vec<Book>) -> LibraryState {
    let mut state = LibraryState::default();
    let ticket = state.begin_load().ticket();
    state.update(Msg::Completed(Completion {
        ticket,
        outcome: Outcome::Loaded(Ok(books)),
    }));
    state
}

fn loaded() -> LibraryState {
    loaded_with(catalog())
}

fn complete(state: &mut LibraryState, request: &Request, outcome: Outcome) -> Vec<Request> {
    state.update(Msg::Completed(Completion {
        ticket: request.ticket(),
        outcome,
    }))
}

fn single(mut requests: Vec<Request>) -> Request {
    assert_eq!(requests.len(), 1, "expected one request: {requests:?}");
    requests.remove(0)
}

fn type_text(state: &mut LibraryState, text: &str) {
    for ch in text.chars() {
        state.update(Msg::Input(ch));
    }
}

fn found() -> SearchResult {
    SearchResult {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        isbn: "9780441172719".to_string(),
        genre: "Science Fiction".to_string(),
        cover_url: None,
    }
}

// ===== Layout =====

#[test]
fn layout_is_narrow_at_breakpoint() {
    assert_eq!(LayoutMode::from_width(80, 80), LayoutMode::Narrow);
    assert_eq!(LayoutMode::from_width(81, 80), LayoutMode::Wide);
    assert_eq!(LayoutMode::from_width(0, 80), LayoutMode::Narrow);
}

#[test]
fn resize_never_changes_overlay() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    let before = state.overlay().clone();

    state.update(Msg::Resize(60));
    assert_eq!(state.layout(), LayoutMode::Narrow);
    assert_eq!(state.visible_panel(), Some(Panel::EditShelf));

    state.update(Msg::Resize(120));
    assert_eq!(state.visible_panel(), Some(Panel::EditModal));
    assert_eq!(state.overlay(), &before);
}

#[test]
fn view_shelf_is_used_in_both_layouts() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::Resize(200));
    assert_eq!(state.visible_panel(), Some(Panel::ViewShelf));
    state.update(Msg::Resize(40));
    assert_eq!(state.visible_panel(), Some(Panel::ViewShelf));
}

// ===== Loading =====

#[test]
fn begin_load_sets_loading() {
    let mut state = LibraryState::default();
    let request = state.begin_load();
    assert!(matches!(request, Request::LoadCatalog { .. }));
    assert!(state.loading());
}

#[test]
fn load_keeps_backend_order() {
    let state = loaded();
    let ids: Vec<i64> = state.books().iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(!state.loading());
}

#[test]
fn only_newest_load_applies() {
    let mut state = LibraryState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    complete(&mut state, &second, Outcome::Loaded(Ok(vec![book(9, "New", "")])));
    complete(&mut state, &first, Outcome::Loaded(Ok(catalog())));

    assert_eq!(state.books().len(), 1);
    assert_eq!(state.books()[0].id, BookId(9));
}

#[test]
fn failed_load_keeps_books_and_sets_error() {
    let mut state = loaded();
    let request = single(state.update(Msg::Reload));
    complete(
        &mut state,
        &request,
        Outcome::Loaded(Err(CatalogError::Transport("refused".to_string()))),
    );

    assert_eq!(state.books().len(), 3);
    assert!(!state.loading());
    assert_eq!(
        state.notice().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}

#[test]
fn reload_drops_vanished_selection() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    let request = single(state.update(Msg::Reload));
    complete(
        &mut state,
        &request,
        Outcome::Loaded(Ok(vec![book(1, "Dune", "")])),
    );

    assert_eq!(state.selected(), None);
    assert_eq!(state.overlay(), &Overlay::Idle);
    assert_eq!(state.cursor(), 0);
}

#[test]
fn reload_keeps_add_panel_open() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    let request = single(state.update(Msg::Reload));
    complete(&mut state, &request, Outcome::Loaded(Ok(Vec::new())));
    assert_eq!(state.overlay().kind(), OverlayKind::Adding);
}

// ===== Selection =====

#[test]
fn pick_opens_view_shelf() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    assert_eq!(state.selected(), Some(BookId(2)));
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(2)));
    assert_eq!(state.cursor(), 1);
}

#[test]
fn pick_unknown_id_is_ignored() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(42)));
    assert_eq!(state.overlay(), &Overlay::Idle);
    assert_eq!(state.selected(), None);
}

#[test]
fn pick_highlighted_follows_cursor() {
    let mut state = loaded();
    state.update(Msg::CursorDown);
    state.update(Msg::CursorDown);
    state.update(Msg::CursorDown);
    assert_eq!(state.cursor(), 2);
    state.update(Msg::PickHighlighted);
    assert_eq!(state.selected(), Some(BookId(3)));
}

#[test]
fn pick_closes_add_panel() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    state.update(Msg::Pick(BookId(1)));
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(1)));
}

#[test]
fn close_returns_to_idle() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::Close);
    assert_eq!(state.overlay(), &Overlay::Idle);
    assert_eq!(state.selected(), None);
}

// ===== Edit =====

#[test]
fn open_edit_requires_viewing() {
    let mut state = loaded();
    state.update(Msg::OpenEdit);
    assert_eq!(state.overlay(), &Overlay::Idle);
}

#[test]
fn edit_form_is_prefilled_and_unfocused() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);

    let edit = state.editing().unwrap();
    assert_eq!(edit.id, BookId(2));
    assert_eq!(edit.form.title.value(), "Emma");
    assert_eq!(edit.form.focus(), None);
    assert_eq!(state.selected(), Some(BookId(2)));
}

#[test]
fn cancel_edit_returns_to_view_and_discards_changes() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    type_text(&mut state, "zzz");
    state.update(Msg::CloseEdit);

    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(2)));
    assert_eq!(state.selected_book().unwrap().title, "Emma");
}

#[test]
fn save_edit_sends_form_values() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    type_text(&mut state, "!");
    state.update(Msg::NextField);
    state.update(Msg::NextField);
    state.update(Msg::NextField);
    state.update(Msg::NextField);
    assert_eq!(state.editing().unwrap().form.focus(), Some(FormField::Read));
    state.update(Msg::ToggleRead);

    let request = single(state.update(Msg::SaveEdit));
    match request {
        Request::Update { id, draft, .. } => {
            assert_eq!(id, BookId(2));
            assert_eq!(draft.title, "Emma!");
            assert!(draft.read);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn successful_save_closes_and_reloads() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    let save = single(state.update(Msg::SaveEdit));

    let follow_up = single(complete(&mut state, &save, Outcome::Updated(Ok(()))));
    assert!(matches!(follow_up, Request::LoadCatalog { .. }));
    assert_eq!(state.overlay(), &Overlay::Idle);
    assert_eq!(state.selected(), None);
}

#[test]
fn failed_save_keeps_edit_open() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    type_text(&mut state, "x");
    let save = single(state.update(Msg::SaveEdit));

    let follow_up = complete(
        &mut state,
        &save,
        Outcome::Updated(Err(CatalogError::Status { status: 500 })),
    );
    assert!(follow_up.is_empty());
    let edit = state.editing().unwrap();
    assert_eq!(edit.pending, None);
    assert_eq!(edit.form.title.value(), "Emmax");
    assert_eq!(state.notice().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn stale_save_success_still_reloads() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    let save = single(state.update(Msg::SaveEdit));
    state.update(Msg::Close);

    let follow_up = single(complete(&mut state, &save, Outcome::Updated(Ok(()))));
    assert!(matches!(follow_up, Request::LoadCatalog { .. }));
    assert_eq!(state.notice(), None);
}

#[test]
fn save_failing_after_cancel_raises_notice_without_reopening() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(2)));
    state.update(Msg::OpenEdit);
    let save = single(state.update(Msg::SaveEdit));
    state.update(Msg::CloseEdit);

    let follow_up = complete(
        &mut state,
        &save,
        Outcome::Updated(Err(CatalogError::Status { status: 500 })),
    );
    assert!(follow_up.is_empty());
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(2)));
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Failed to save book"));
}

// ===== Delete =====

#[test]
fn delete_asks_for_confirmation() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    let requests = state.update(Msg::RequestDelete);
    assert!(requests.is_empty());
    assert_eq!(state.visible_panel(), Some(Panel::ConfirmDialog));
}

#[test]
fn declining_delete_returns_to_view() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let requests = state.update(Msg::ConfirmDelete(false));
    assert!(requests.is_empty());
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(1)));
}

#[test]
fn confirmed_delete_closes_and_reloads() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let delete = single(state.update(Msg::ConfirmDelete(true)));
    assert!(matches!(delete, Request::Delete { id: BookId(1), .. }));

    let follow_up = single(complete(&mut state, &delete, Outcome::Deleted(Ok(()))));
    assert!(matches!(follow_up, Request::LoadCatalog { .. }));
    assert_eq!(state.overlay(), &Overlay::Idle);
    assert_eq!(state.selected(), None);
}

#[test]
fn repeated_confirm_sends_one_delete() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    assert_eq!(state.update(Msg::ConfirmDelete(true)).len(), 1);
    assert!(state.update(Msg::ConfirmDelete(true)).is_empty());
}

#[test]
fn in_flight_delete_cannot_be_declined() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let delete = single(state.update(Msg::ConfirmDelete(true)));

    assert!(state.update(Msg::ConfirmDelete(false)).is_empty());
    assert!(matches!(
        state.overlay(),
        Overlay::ConfirmDelete(DeleteState { id: BookId(1), pending: Some(_) })
    ));

    // The failure still lands on the gate that sent it
    complete(
        &mut state,
        &delete,
        Outcome::Deleted(Err(CatalogError::Status { status: 500 })),
    );
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(1)));
    assert_eq!(state.notice().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn delete_failing_after_close_raises_notice() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let delete = single(state.update(Msg::ConfirmDelete(true)));
    state.update(Msg::Pick(BookId(2)));

    complete(
        &mut state,
        &delete,
        Outcome::Deleted(Err(CatalogError::Status { status: 500 })),
    );
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(2)));
    assert!(state.notice().unwrap().text.starts_with("Failed to delete book"));
}

#[test]
fn failed_delete_returns_to_view() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let delete = single(state.update(Msg::ConfirmDelete(true)));
    complete(
        &mut state,
        &delete,
        Outcome::Deleted(Err(CatalogError::Status { status: 404 })),
    );
    assert_eq!(state.overlay(), &Overlay::Viewing(BookId(1)));
    assert_eq!(state.notice().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn delete_without_confirmation_sends_immediately() {
    let mut state = LibraryState::new(LibraryOptions {
        confirm_delete: false,
        ..LibraryOptions::default()
    });
    let load = state.begin_load();
    complete(&mut state, &load, Outcome::Loaded(Ok(catalog())));
    state.update(Msg::Pick(BookId(3)));

    let delete = single(state.update(Msg::RequestDelete));
    assert!(matches!(delete, Request::Delete { id: BookId(3), .. }));
}

// ===== Add: manual =====

#[test]
fn open_add_starts_on_search_tab() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::OpenAdd);

    let add = state.adding().unwrap();
    assert_eq!(add.mode, AddMode::Search);
    assert_eq!(state.selected(), None);
}

#[test]
fn manual_submit_closes_and_reloads() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    state.update(Msg::SetAddMode(AddMode::Manual));
    type_text(&mut state, "New Book");

    let create = single(state.update(Msg::SubmitManual));
    match &create {
        Request::Create { draft, .. } => assert_eq!(draft.title, "New Book"),
        other => panic!("expected create, got {other:?}"),
    }

    let follow_up = single(complete(&mut state, &create, Outcome::Created(Ok(()))));
    assert!(matches!(follow_up, Request::LoadCatalog { .. }));
    assert_eq!(state.overlay(), &Overlay::Idle);
}

#[test]
fn manual_create_failing_after_close_raises_notice() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    state.update(Msg::SetAddMode(AddMode::Manual));
    type_text(&mut state, "New Book");
    let create = single(state.update(Msg::SubmitManual));
    state.update(Msg::Close);

    let follow_up = complete(
        &mut state,
        &create,
        Outcome::Created(Err(CatalogError::Status { status: 500 })),
    );
    assert!(follow_up.is_empty());
    assert_eq!(state.overlay(), &Overlay::Idle);
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Failed to add book"));
}

#[test]
fn manual_submit_on_search_tab_is_ignored() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    assert!(state.update(Msg::SubmitManual).is_empty());
}

#[test]
fn failed_manual_submit_keeps_draft() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    state.update(Msg::SetAddMode(AddMode::Manual));
    type_text(&mut state, "Keep");
    let create = single(state.update(Msg::SubmitManual));
    complete(
        &mut state,
        &create,
        Outcome::Created(Err(CatalogError::Status { status: 400 })),
    );

    let add = state.adding().unwrap();
    assert_eq!(add.draft.title.value(), "Keep");
    assert!(!add.working());
}

// ===== Add: search =====

#[test]
fn search_tab_types_into_isbn() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "978");
    let add = state.adding().unwrap();
    assert_eq!(add.draft.isbn.value(), "978");
    assert_eq!(add.draft.title.value(), "");
}

#[test]
fn invalid_isbn_never_hits_network() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "abc-");
    let requests = state.update(Msg::SubmitSearch);

    assert!(requests.is_empty());
    let add = state.adding().unwrap();
    assert_eq!(add.search_error.as_deref(), Some("ISBN is invalid"));
    assert!(!add.validating());
}

#[test]
fn search_sends_cleaned_isbn() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "978-0-14");
    let search = single(state.update(Msg::SubmitSearch));

    match search {
        Request::Search { isbn, .. } => assert_eq!(isbn.as_str(), "978014"),
        other => panic!("expected search, got {other:?}"),
    }
    assert!(state.adding().unwrap().validating());
}

#[test]
fn search_hit_for_listed_isbn_is_marked_added() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "9780441172719");
    let search = single(state.update(Msg::SubmitSearch));
    complete(&mut state, &search, Outcome::Searched(Ok(found())));

    let add = state.adding().unwrap();
    assert_eq!(add.search_result, Some(found()));
    assert!(add.added);
    assert!(!add.can_add_found());
}

#[test]
fn search_error_is_shown() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "111");
    let search = single(state.update(Msg::SubmitSearch));
    complete(
        &mut state,
        &search,
        Outcome::Searched(Err(SearchError::NoResults)),
    );

    let add = state.adding().unwrap();
    assert_eq!(add.search_error.as_deref(), Some("ISBN returned no results"));
    assert_eq!(add.search_result, None);
}

#[test]
fn adding_found_book_keeps_panel_open() {
    let mut state = loaded_with(Vec::new());
    state.update(Msg::OpenAdd);
    type_text(&mut state, "9780441172719");
    let search = single(state.update(Msg::SubmitSearch));
    complete(&mut state, &search, Outcome::Searched(Ok(found())));
    assert!(state.adding().unwrap().can_add_found());

    let create = single(state.update(Msg::AddFoundBook));
    match &create {
        Request::Create { draft, .. } => {
            assert_eq!(draft.title, "Dune");
            assert!(!draft.read);
        }
        other => panic!("expected create, got {other:?}"),
    }

    let follow_up = single(complete(&mut state, &create, Outcome::Created(Ok(()))));
    assert!(matches!(follow_up, Request::LoadCatalog { .. }));
    let add = state.adding().unwrap();
    assert!(add.added);
    assert_eq!(add.search_result, Some(found()));
}

#[test]
fn failed_found_book_create_shows_error() {
    let mut state = loaded_with(Vec::new());
    state.update(Msg::OpenAdd);
    type_text(&mut state, "1");
    let search = single(state.update(Msg::SubmitSearch));
    complete(&mut state, &search, Outcome::Searched(Ok(found())));
    let create = single(state.update(Msg::AddFoundBook));
    complete(
        &mut state,
        &create,
        Outcome::Created(Err(CatalogError::Status { status: 500 })),
    );

    let add = state.adding().unwrap();
    assert_eq!(add.search_error.as_deref(), Some("Failed to add book"));
    assert!(!add.added);
}

#[test]
fn search_result_after_tab_switch_is_dropped() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "123");
    let search = single(state.update(Msg::SubmitSearch));
    state.update(Msg::SetAddMode(AddMode::Manual));
    complete(&mut state, &search, Outcome::Searched(Ok(found())));

    assert_eq!(state.adding().unwrap().search_result, None);
}

#[test]
fn search_result_after_close_is_dropped() {
    let mut state = loaded();
    state.update(Msg::OpenAdd);
    type_text(&mut state, "123");
    let search = single(state.update(Msg::SubmitSearch));
    state.update(Msg::Close);
    complete(&mut state, &search, Outcome::Searched(Ok(found())));
    assert_eq!(state.overlay(), &Overlay::Idle);
}

// ===== Focus =====

#[test]
fn narrow_add_requests_focus() {
    let mut state = loaded();
    state.update(Msg::Resize(60));
    state.update(Msg::OpenAdd);
    assert!(state.focus_requested());

    assert!(state.apply_focus_request());
    assert_eq!(state.adding().unwrap().draft.focus(), Some(FormField::Isbn));
    assert!(!state.apply_focus_request());
}

#[test]
fn wide_edit_does_not_request_focus() {
    let mut state = loaded();
    state.update(Msg::Resize(120));
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::OpenEdit);
    assert!(!state.focus_requested());
}

#[test]
fn closing_drops_focus_request() {
    let mut state = loaded();
    state.update(Msg::Resize(60));
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::OpenEdit);
    state.update(Msg::CloseEdit);
    assert!(!state.focus_requested());
}

// ===== Notices and reset =====

#[test]
fn user_action_clears_notice() {
    let mut state = loaded();
    state.update(Msg::Pick(BookId(1)));
    state.update(Msg::RequestDelete);
    let delete = single(state.update(Msg::ConfirmDelete(true)));
    complete(&mut state, &delete, Outcome::Deleted(Ok(())));
    assert!(state.notice().is_some());

    state.update(Msg::CursorDown);
    assert_eq!(state.notice(), None);
}

#[test]
fn reset_makes_earlier_tickets_stale() {
    let mut state = LibraryState::default();
    let load = state.begin_load();
    state.reset();
    complete(&mut state, &load, Outcome::Loaded(Ok(catalog())));

    assert!(state.books().is_empty());
    assert!(!state.loading());
    assert!(state.begin_load().ticket() > load.ticket());
}
