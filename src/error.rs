//! CMS error taxonomy

use thiserror::Error;

/// Errors surfaced by the document store client.
///
/// A build that hits any of these must fail rather than render partial
/// data; the server's fallback path is the only place a missing document
/// is tolerated.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("CMS request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("CMS returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode CMS response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API root listed no master ref to query against.
    #[error("no master ref found at {api_url}")]
    MissingMasterRef { api_url: String },

    /// A document lookup by uid matched nothing.
    #[error("document '{uid}' of type '{doc_type}' not found")]
    NotFound { doc_type: String, uid: String },
}

/// Crate-local result alias for store operations.
pub type CmsResult<T> = std::result::Result<T, CmsError>;
