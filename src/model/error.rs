//! Error types for booklib.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`crate::config::ConfigError`] - Config file read/parse failures
//!   - [`crate::logging::LoggingError`] - Tracing setup failures
//!   - [`crate::view::TuiError`] - Terminal failures
//!   - [`CatalogError`] - Client construction failures
//! - [`CatalogError`] - list/get/create/update/delete failures
//! - [`SearchError`] - ISBN lookup failures, surfaced to the user verbatim
//!
//! # Recovery Strategy
//!
//! Catalog and search errors are **non-fatal**: the library view shows them
//! and the overlay state machine stays where it was. Only `AppError` ends
//! the program.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The catalog client could not be built.
    #[error("Catalog client error: {0}")]
    Client(#[from] CatalogError),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failures of the plain REST operations (list, get, create, update, delete).
///
/// Messages are carried as `String` rather than wrapping `reqwest::Error` so
/// the error can travel through the request channel and be cloned into
/// view state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The configured server URL cannot be parsed.
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Connection-level failure: refused, reset, DNS.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Server responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Failures of the ISBN search flow.
///
/// `Display` output is the exact text shown under the search field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Rejected locally (no digits) or by the backend with HTTP 400.
    #[error("ISBN is invalid")]
    InvalidIsbn,

    /// Backend answered HTTP 404.
    #[error("ISBN returned no results")]
    NoResults,

    /// Any other HTTP status.
    #[error("Unexpected response: {0}")]
    UnexpectedStatus(u16),

    /// Transport failure or an unreadable 200 body.
    #[error("Network error")]
    Network,
}

impl SearchError {
    /// Classify a non-200 search status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => SearchError::InvalidIsbn,
            404 => SearchError::NoResults,
            other => SearchError::UnexpectedStatus(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_messages_match_user_facing_text() {
        assert_eq!(SearchError::InvalidIsbn.to_string(), "ISBN is invalid");
        assert_eq!(SearchError::NoResults.to_string(), "ISBN returned no results");
        assert_eq!(
            SearchError::UnexpectedStatus(500).to_string(),
            "Unexpected response: 500"
        );
        assert_eq!(SearchError::Network.to_string(), "Network error");
    }

    #[test]
    fn from_status_classifies_codes() {
        assert_eq!(SearchError::from_status(400), SearchError::InvalidIsbn);
        assert_eq!(SearchError::from_status(404), SearchError::NoResults);
        assert_eq!(
            SearchError::from_status(503),
            SearchError::UnexpectedStatus(503)
        );
    }

    #[test]
    fn catalog_status_error_display() {
        let err = CatalogError::Status { status: 500 };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn app_error_from_catalog_error() {
        let err: AppError = CatalogError::Transport("refused".to_string()).into();
        let msg = err.to_string();
        assert!(msg.contains("Catalog client error"));
        assert!(msg.contains("refused"));
    }

    #[test]
    fn app_error_from_config_error() {
        let err: AppError = crate::config::ConfigError::InvalidPath("x".to_string()).into();
        assert!(err.to_string().contains("Configuration error"));
    }
}
