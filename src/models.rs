//! Data models for normalized space content.
//!
//! This module defines the two structures every feed produces:
//! - [`ContentItem`]: a single normalized record (news article, blog post,
//!   astronomy picture, or spacecraft mission)
//! - [`PageResult`]: one fetched window of items plus pagination metadata
//!
//! Feeds map wildly different wire schemas (Spaceflight News envelopes,
//! the bare APOD object, the unpaginated ISRO catalog) into these shapes,
//! so filtering, the view controller, and the outputs all work against a
//! single model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::paging;

/// A single normalized content record surfaced to the UI.
///
/// Items are immutable once fetched. The `id` is unique within its source
/// feed only; ids from different feeds may collide and are never compared
/// across feeds.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    /// Identifier unique within the originating feed.
    pub id: String,
    /// The headline or name of the record.
    pub title: String,
    /// Summary or body text. May be empty when the source omits it.
    pub summary: String,
    /// Publication timestamp, when the source provided one we could parse.
    pub published: Option<DateTime<Utc>>,
    /// The originating publisher/site label, used for source filtering.
    pub source: String,
    /// Optional image URL for the record.
    pub image_url: Option<String>,
    /// Optional external link to the full record.
    pub link: Option<String>,
}

impl ContentItem {
    /// Render the publication timestamp as a short date label.
    ///
    /// Used by the text output; items without a parseable timestamp show
    /// `"no date"`.
    pub fn published_label(&self) -> String {
        self.published
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "no date".to_string())
    }
}

/// One fetched window of [`ContentItem`] plus pagination metadata.
///
/// # Invariants
///
/// - `page` is clamped to `[1, total_pages()]` at construction
/// - `total_pages() == max(1, ceil(total_count / page_size))`
/// - `items.len() <= page_size`
///
/// Single-item feeds (the astronomy picture of the day) are modeled as a
/// `PageResult` with `total_count = 1` so every feed presents the same
/// contract.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    /// The items in this window, in the order the source returned them.
    pub items: Vec<ContentItem>,
    /// Total number of items in the remote collection.
    pub total_count: u64,
    /// The (clamped) 1-based page index this window represents.
    pub page: u32,
    /// The requested window size.
    pub page_size: u32,
}

impl PageResult {
    /// Build a page, clamping the requested page index into range.
    ///
    /// An out-of-range request is not an error; it silently becomes the
    /// nearest valid page index.
    pub fn new(items: Vec<ContentItem>, total_count: u64, page: u32, page_size: u32) -> Self {
        let total_pages = paging::compute_total_pages(total_count, page_size);
        Self {
            items,
            total_count,
            page: paging::clamp_page(page, total_pages),
            page_size,
        }
    }

    /// Wrap a single record as a one-page result.
    pub fn single(item: ContentItem) -> Self {
        Self::new(vec![item], 1, 1, 1)
    }

    /// Number of pages in the remote collection, never less than 1.
    pub fn total_pages(&self) -> u32 {
        paging::compute_total_pages(self.total_count, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_item(id: &str, title: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            published: None,
            source: "Test Site".to_string(),
            image_url: None,
            link: None,
        }
    }

    #[test]
    fn test_page_result_total_pages() {
        let page = PageResult::new(vec![], 30, 1, 12);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_result_clamps_page_index() {
        // count=30, size=12 -> 3 pages; page 4 becomes page 3
        let page = PageResult::new(vec![], 30, 4, 12);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_page_result_zero_page_becomes_one() {
        let page = PageResult::new(vec![], 30, 0, 12);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_collection_still_has_one_page() {
        let page = PageResult::new(vec![], 0, 1, 12);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_single_item_result() {
        let page = PageResult::single(make_item("2025-08-07", "Spiral Galaxy NGC 1350"));
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_published_label_with_date() {
        let mut item = make_item("1", "Mars Rover Update");
        item.published = Some(Utc.with_ymd_and_hms(2025, 8, 7, 14, 30, 0).unwrap());
        assert_eq!(item.published_label(), "2025-08-07");
    }

    #[test]
    fn test_published_label_without_date() {
        let item = make_item("1", "Mars Rover Update");
        assert_eq!(item.published_label(), "no date");
    }

    #[test]
    fn test_content_item_serializes() {
        let item = make_item("42", "Launch Delayed");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"id\":\"42\""));
        assert!(json.contains("Launch Delayed"));
    }
}
