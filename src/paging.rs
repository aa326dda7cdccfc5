//! Pagination and client-side filtering.
//!
//! Pure functions only: given a fetched window of items and the current
//! search/source selections, compute the visible subset, the distinct
//! source set, and page arithmetic. Filtering is scoped to the currently
//! fetched page; it narrows what has already been downloaded and never
//! triggers a new remote query.

use itertools::Itertools;

use crate::models::ContentItem;

/// Sentinel source selection meaning "do not filter by source".
pub const ALL_SOURCES: &str = "all";

/// Number of pages needed to hold `total_count` items, never less than 1.
///
/// An empty collection still has one (empty) page so the page index stays
/// well-defined.
pub fn compute_total_pages(total_count: u64, page_size: u32) -> u32 {
    debug_assert!(page_size > 0, "page_size must be positive");
    let pages = total_count.div_ceil(u64::from(page_size));
    pages.clamp(1, u64::from(u32::MAX)) as u32
}

/// Clamp a 1-based page index into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// The slice of `items` visible on the given 1-based page.
///
/// Used by feeds whose remote API returns the entire collection at once
/// (the ISRO spacecraft catalog), where windowing happens on our side.
pub fn page_window<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let size = page_size as usize;
    let page = clamp_page(page, compute_total_pages(items.len() as u64, page_size));
    let start = (page as usize - 1) * size;
    let end = (start + size).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

/// Select the items passing both the search and the source predicate.
///
/// An item matches the search when `search_term` is a case-insensitive
/// substring of its title or its summary; an empty term matches
/// everything. An item matches the source when `selected_source` is
/// [`ALL_SOURCES`] or equals the item's source label. Output preserves
/// input order; nothing is re-sorted.
pub fn apply_filters<'a>(
    items: &'a [ContentItem],
    search_term: &str,
    selected_source: &str,
) -> Vec<&'a ContentItem> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_search = needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.summary.to_lowercase().contains(&needle);
            let matches_source =
                selected_source == ALL_SOURCES || item.source == selected_source;
            matches_search && matches_source
        })
        .collect()
}

/// Distinct source labels over the given items, in first-seen order.
///
/// Populates the source filter control. Derived from the current page's
/// items only, not the full remote collection.
pub fn source_set(items: &[ContentItem]) -> Vec<String> {
    items.iter().map(|item| item.source.clone()).unique().collect()
}
