//! Catalog client.
//!
//! - [`CatalogApi`]: the five REST operations plus ISBN search
//! - [`HttpCatalogClient`]: blocking `reqwest` implementation
//! - [`RequestWorker`]: runs requests off the UI thread
//! - [`Request`] / [`Completion`]: the controller's side of the boundary

use crate::model::{Book, BookDraft, BookId, CatalogError, Isbn, SearchError, SearchResult};

pub mod http;
pub mod request;
pub mod worker;

pub use http::HttpCatalogClient;
pub use request::{execute, Completion, Outcome, Request, Ticket};
pub use worker::{RequestWorker, WorkerError};

/// REST surface of the library backend.
///
/// Implementations are stateless: no caching, no retry, no staleness
/// tracking. Callers reload the whole catalog after any mutation.
pub trait CatalogApi {
    /// `GET /books`, in backend order.
    fn list(&self) -> Result<Vec<Book>, CatalogError>;

    /// `GET /books/{id}`.
    fn get(&self, id: BookId) -> Result<Book, CatalogError>;

    /// `POST /books`. The response body is not read.
    fn create(&self, draft: &BookDraft) -> Result<(), CatalogError>;

    /// `PUT /books/{id}`. The response body is not read.
    fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), CatalogError>;

    /// `DELETE /books/{id}`.
    fn delete(&self, id: BookId) -> Result<(), CatalogError>;

    /// `GET /search/{isbn}`.
    fn search(&self, isbn: &Isbn) -> Result<SearchResult, SearchError>;
}
