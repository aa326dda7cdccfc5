//! Content feeds for the space APIs we aggregate.
//!
//! This module contains one submodule per remote API. Every feed
//! normalizes its wire schema into [`PageResult`]/`ContentItem` and
//! presents the same paged contract, whatever the remote actually
//! supports.
//!
//! # Supported Feeds
//!
//! | Feed | Module | Pagination | Notes |
//! |------|--------|------------|-------|
//! | News articles | [`spaceflight`] | Server-side `limit`/`offset` | Spaceflight News API v4 |
//! | Blog posts | [`spaceflight`] | Server-side `limit`/`offset` | Same envelope as articles |
//! | Picture of the day | [`apod`] | Single item | NASA APOD, needs an API key |
//! | ISRO missions | [`missions`] | Client-side windowing | Catalog arrives unpaginated |
//!
//! # Common Patterns
//!
//! Each feed module:
//! - keeps its wire structs private and separate from the normalized model
//! - parses the body in a pure function so tests cover it without a network
//! - tolerates unknown wire fields and treats a missing `id`/`title` as a
//!   parse failure
//! - issues exactly one HTTP request per `fetch_page` call, with no retry

pub mod apod;
pub mod missions;
pub mod spaceflight;

use crate::client::HttpClient;
use crate::error::FetchResult;
use crate::models::PageResult;

/// A remote content API that can produce one page of normalized items.
///
/// Implementations hold their endpoint configuration (base URL, API key)
/// and borrow the shared [`HttpClient`] per call, so tests can drive the
/// view controller with a fake feed instead of a live network.
pub trait ContentFeed {
    /// Short human label used in log lines and failure messages,
    /// e.g. `"articles"` or `"image of the day"`.
    fn label(&self) -> &str;

    /// Fetch one page of content.
    ///
    /// `page` is 1-based; implementations clamp out-of-range requests
    /// rather than failing them. Exactly one outbound HTTP call is made
    /// per invocation.
    async fn fetch_page(
        &self,
        http: &HttpClient,
        page: u32,
        page_size: u32,
    ) -> FetchResult<PageResult>;
}
