//! Blocking HTTP implementation of [`CatalogApi`].

use crate::client::CatalogApi;
use crate::model::{Book, BookDraft, BookId, CatalogError, Isbn, SearchError, SearchResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("booklib/", env!("CARGO_PKG_VERSION"));

/// Catalog client talking JSON over HTTP to a fixed base URL.
///
/// No timeout is configured; a request only fails on connection-level
/// errors or a non-success status.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Build a client for the given server, e.g. `http://localhost:8080`.
    ///
    /// A trailing slash is ignored. Paths such as `/books` are appended to
    /// the base as-is, so a base with a path prefix (`http://host/api`)
    /// works too.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidBaseUrl` if the URL does not parse or
    /// is not http(s), and `CatalogError::Transport` if the HTTP stack
    /// cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let trimmed = base_url.trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| CatalogError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send and require a 2xx status.
    fn send(&self, builder: RequestBuilder, label: &str) -> Result<Response, CatalogError> {
        let response = builder.send().map_err(|e| {
            warn!(request = label, error = %e, "Catalog request failed");
            CatalogError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(request = label, status = status.as_u16(), "Catalog response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(CatalogError::Status {
                status: status.as_u16(),
            })
        }
    }
}

impl CatalogApi for HttpCatalogClient {
    fn list(&self) -> Result<Vec<Book>, CatalogError> {
        let response = self.send(self.request(Method::GET, "/books"), "GET /books")?;

        // An empty catalog may be encoded as `null`
        let books: Option<Vec<Book>> = response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(books.unwrap_or_default())
    }

    fn get(&self, id: BookId) -> Result<Book, CatalogError> {
        let path = format!("/books/{id}");
        let response = self.send(self.request(Method::GET, &path), "GET /books/{id}")?;
        response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    fn create(&self, draft: &BookDraft) -> Result<(), CatalogError> {
        let builder = self.request(Method::POST, "/books").json(draft);
        self.send(builder, "POST /books").map(drop)
    }

    fn update(&self, id: BookId, draft: &BookDraft) -> Result<(), CatalogError> {
        let path = format!("/books/{id}");
        let builder = self.request(Method::PUT, &path).json(draft);
        self.send(builder, "PUT /books/{id}").map(drop)
    }

    fn delete(&self, id: BookId) -> Result<(), CatalogError> {
        let path = format!("/books/{id}");
        self.send(self.request(Method::DELETE, &path), "DELETE /books/{id}")
            .map(drop)
    }

    fn search(&self, isbn: &Isbn) -> Result<SearchResult, SearchError> {
        let path = format!("/search/{isbn}");
        let response = self.request(Method::GET, &path).send().map_err(|e| {
            warn!(error = %e, "ISBN search failed");
            SearchError::Network
        })?;

        let status = response.status();
        debug!(isbn = %isbn, status = status.as_u16(), "ISBN search response");

        if status == StatusCode::OK {
            response.json().map_err(|e| {
                warn!(error = %e, "ISBN search returned unreadable body");
                SearchError::Network
            })
        } else {
            Err(SearchError::from_status(status.as_u16()))
        }
    }
}
