//! Fetch error taxonomy for the remote content boundary.
//!
//! Every failure that can occur while talking to a content API is folded
//! into one of three kinds:
//!
//! - [`FetchError::Network`]: the request never completed (DNS, connect,
//!   timeout, TLS, or a body read that died mid-stream)
//! - [`FetchError::HttpStatus`]: the server answered with a non-2xx status
//! - [`FetchError::Parse`]: the body arrived but did not have the shape we
//!   require (missing `id`/`title`, truncated JSON, wrong envelope)
//!
//! The kinds matter for logging and tests. At the view boundary they all
//! collapse into a single user-visible failure message, so no caller
//! recovers differently per kind.

use thiserror::Error;

/// Error returned by the content client and the feed implementations.
///
/// Values of this type never escape the fetch boundary as panics; feeds
/// return them through [`FetchResult`] and the view controller renders
/// them as a failure notice.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The server responded with a non-success status code.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// The numeric status code (e.g. 404, 503).
        status: u16,
        /// The URL that produced the response.
        url: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Result alias used throughout the fetch path.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
