//! Error types for image search operations
//!
//! A search fails in exactly two ways: the request never produced a
//! usable response (`Transport`), or the response body was not the
//! expected JSON shape (`Decode`). Per-hit decode failures are not
//! errors; they are filtered out of the result page.

use thiserror::Error;

/// Errors that can occur when performing an image search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be completed
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not the expected JSON shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Ways a request can fail before the body is ever decoded
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request failed at the HTTP layer (connect, timeout, TLS)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: reqwest::StatusCode,
        /// Response body text, for diagnostics
        body: String,
    },

    /// The response did not carry a JSON content type
    #[error("unexpected content type: {content_type:?}")]
    ContentType {
        /// Value of the Content-Type header, if any
        content_type: Option<String>,
    },
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(TransportError::Request(err))
    }
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
