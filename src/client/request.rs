//! Requests issued by the library controller and their completions.
//!
//! The controller never talks to the network itself. It returns
//! [`Request`] values; the shell executes them and feeds the resulting
//! [`Completion`] back in. Tickets let the controller tell a fresh
//! completion from one whose overlay has since been closed.

use crate::client::CatalogApi;
use crate::model::{Book, BookDraft, BookId, CatalogError, Isbn, SearchError, SearchResult};

/// Monotonically increasing request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// A catalog operation to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `GET /books`
    LoadCatalog {
        /// Issued ticket.
        ticket: Ticket,
    },
    /// `POST /books`
    Create {
        /// Issued ticket.
        ticket: Ticket,
        /// Book to create.
        draft: BookDraft,
    },
    /// `PUT /books/{id}`
    Update {
        /// Issued ticket.
        ticket: Ticket,
        /// Book being replaced.
        id: BookId,
        /// New field values.
        draft: BookDraft,
    },
    /// `DELETE /books/{id}`
    Delete {
        /// Issued ticket.
        ticket: Ticket,
        /// Book to remove.
        id: BookId,
    },
    /// `GET /search/{isbn}`
    Search {
        /// Issued ticket.
        ticket: Ticket,
        /// Normalized ISBN to look up.
        isbn: Isbn,
    },
}

impl Request {
    /// Ticket the completion will carry.
    pub fn ticket(&self) -> Ticket {
        match self {
            Request::LoadCatalog { ticket }
            | Request::Create { ticket, .. }
            | Request::Update { ticket, .. }
            | Request::Delete { ticket, .. }
            | Request::Search { ticket, .. } => *ticket,
        }
    }
}

/// Result of an executed [`Request`], tagged with its ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Ticket of the request that produced this.
    pub ticket: Ticket,
    /// What the backend returned.
    pub outcome: Outcome,
}

/// Per-operation result payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Catalog list, in backend order.
    Loaded(Result<Vec<Book>, CatalogError>),
    /// A book was posted.
    Created(Result<(), CatalogError>),
    /// A book was replaced.
    Updated(Result<(), CatalogError>),
    /// A book was removed.
    Deleted(Result<(), CatalogError>),
    /// ISBN lookup result.
    Searched(Result<SearchResult, SearchError>),
}

/// Run a request against a catalog and wrap the result.
///
/// Blocking; callers decide which thread this runs on.
pub fn execute(api: &dyn CatalogApi, request: Request) -> Completion {
    let ticket = request.ticket();
    let outcome = match request {
        Request::LoadCatalog { .. } => Outcome::Loaded(api.list()),
        Request::Create { draft, .. } => Outcome::Created(api.create(&draft)),
        Request::Update { id, draft, .. } => Outcome::Updated(api.update(id, &draft)),
        Request::Delete { id, .. } => Outcome::Deleted(api.delete(id)),
        Request::Search { isbn, .. } => Outcome::Searched(api.search(&isbn)),
    };
    Completion { ticket, outcome }
}
