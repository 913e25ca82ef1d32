//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod book;
pub mod error;
pub mod isbn;
pub mod key_action;

// Re-export for convenience
pub use book::{Book, BookDraft, BookId, SearchResult};
pub use error::{AppError, CatalogError, SearchError};
pub use isbn::{digits_only, Isbn, MAX_ISBN_DIGITS};
pub use key_action::KeyAction;
