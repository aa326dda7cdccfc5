//! HTTP transport for the content feeds.
//!
//! [`HttpClient`] is a thin, explicitly constructed wrapper around
//! [`reqwest::Client`]. Feeds borrow it instead of holding their own
//! connection pools, and tests substitute canned bodies by parsing below
//! this boundary, so nothing in the crate reaches for a process-wide
//! singleton.
//!
//! One call to [`HttpClient::get_text`] is exactly one outbound request.
//! There is no retry here; a failed page fetch surfaces to the view
//! controller and the user decides whether to re-issue it.

use tracing::{info, instrument, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Shared HTTP transport with an explicit constructor and no global state.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a transport with the default reqwest configuration.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Issue a single GET and return the response body as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] when the request never completes or the
    ///   body read dies mid-stream
    /// - [`FetchError::HttpStatus`] when the server answers with a
    ///   non-2xx status
    ///
    /// Decoding the body is the caller's job; keeping the transport
    /// text-only lets parse failures stay distinguishable from transport
    /// failures.
    #[instrument(level = "info", skip_all, fields(url = %url))]
    pub async fn get_text(&self, url: Url) -> FetchResult<String> {
        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request returned non-success status");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        info!(bytes = body.len(), "Fetched response body");
        Ok(body)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
