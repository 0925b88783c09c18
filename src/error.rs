//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Failure of a single paced fetch, classified by layer.
///
/// All variants are recoverable by the caller; the client never retries on
/// its own and never panics across its boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or a non-2xx HTTP status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body that is not valid JSON.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed envelope reporting an application-level failure
    /// (`success` false or absent).
    #[error("api error: {0}")]
    Api(String),
}
