//! Error types for the document-store client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the document store or while
/// transforming fetched objects.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the store, reported with the numeric code.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Document not found (404 on a get-by-id).
    #[error("not found: {0}")]
    NotFound(String),

    /// The dashboard's `panelsJSON` could not be parsed. The dashboard is
    /// the root of the copy, so this aborts the whole run.
    #[error("malformed panelsJSON: {0}")]
    MalformedPanels(String),

    /// A saved search's nested `searchSourceJSON` could not be parsed for
    /// the index rewrite. Only that search is skipped.
    #[error("malformed searchSourceJSON: {0}")]
    MalformedSearchSource(String),

    /// Source and destination endpoints are identical.
    #[error("the source and destination clusters are the same")]
    SameCluster,
}

impl ClientError {
    /// True for errors that abort the whole run rather than a single object.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedPanels(_) | Self::SameCluster)
    }
}
