//! Catalog records exchanged with the backend.
//!
//! Three shapes exist on the client side:
//! - [`Book`]: a persisted record, always carrying a backend-assigned [`BookId`]
//! - [`BookDraft`]: the request body for create/update, never carries an id
//! - [`SearchResult`]: a transient ISBN lookup hit, not yet persisted

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ===== BookId =====

/// Backend-assigned identifier of a persisted book.
///
/// Opaque to the client: only compared for equality and formatted into
/// request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Book =====

/// A persisted catalog record as returned by `GET /books`.
///
/// Text fields and `read` tolerate being absent or `null` in the payload and
/// fall back to their defaults. Extra backend fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Backend-assigned id.
    pub id: BookId,
    /// Title as entered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Author name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// ISBN as stored, not normalized.
    #[serde(default, deserialize_with = "null_as_default")]
    pub isbn: String,
    /// Free-text genre.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    /// Whether the user has read it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    /// Creation time, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Create a book with the given id and empty fields.
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            genre: String::new(),
            read: false,
            created_at: None,
        }
    }

    /// Copy the editable fields into a request body.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            genre: self.genre.clone(),
            read: self.read,
        }
    }

    /// Secondary line shown under the title in lists and shelves.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.author, self.genre)
    }
}

// ===== BookDraft =====

/// Request body for `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    /// Title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// ISBN as typed.
    pub isbn: String,
    /// Free-text genre.
    pub genre: String,
    /// Read flag.
    pub read: bool,
}

// ===== SearchResult =====

/// A hit from `GET /search/{isbn}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Author name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// ISBN the lookup resolved to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub isbn: String,
    /// Genre, often empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    /// Cover image URL, if the lookup found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl SearchResult {
    /// Request body used when the hit is added to the catalog.
    ///
    /// Found books always start out unread.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            genre: self.genre.clone(),
            read: false,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
