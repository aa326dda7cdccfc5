//! Per-page view state machine.
//!
//! Each content page owns exactly one [`ViewController`]. The controller
//! holds the fetch lifecycle (`Loading` to `Ready` or `Failed`), the
//! current page index, and the search/source selections, and it exposes a
//! read-only [`Snapshot`] after every transition.
//!
//! Transitions are driven by discrete [`ViewEvent`]s rather than implicit
//! render side effects, so the logic is independent of any particular
//! presentation layer:
//!
//! ```text
//! Activated ──────► Loading ──fetch ok──► Ready ◄──┐
//!                      ▲    └─fetch err─► Failed   │
//!                      │                    │      │
//!                      └── PageChanged / Retried ──┘
//! ```
//!
//! # Ordering discipline
//!
//! At most one fetch result is ever accepted per issued request. Every
//! [`FetchRequest`] carries a generation number; a result whose
//! generation no longer matches the controller's current one is discarded
//! silently. This is what makes "issue page 2, then page 3 before page 2
//! resolves" deterministic: only page 3's result lands, whatever order
//! the responses arrive in. Disposal flips a flag that rejects everything,
//! so an unmounted page can never be mutated by a late callback.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::client::HttpClient;
use crate::error::FetchError;
use crate::feeds::ContentFeed;
use crate::models::{ContentItem, PageResult};
use crate::paging::{self, ALL_SOURCES};

/// Fetch lifecycle of one content page.
#[derive(Debug)]
pub enum ViewPhase {
    /// A fetch is outstanding; no data yet.
    Loading,
    /// The most recent fetch succeeded.
    Ready(PageResult),
    /// The most recent fetch failed with a user-visible reason.
    Failed(String),
}

/// Page navigation requests.
#[derive(Debug, Clone, Copy)]
pub enum PageTurn {
    /// Go one page back. No-op at page 1.
    Previous,
    /// Go one page forward. No-op at the last known page.
    Next,
    /// Jump to a specific page, clamped to the known range.
    Goto(u32),
}

/// Search/source selection edits. These never trigger a fetch; the
/// visible subset is recomputed from data already held.
#[derive(Debug, Clone)]
pub enum FilterChange {
    Search(String),
    Source(String),
}

/// Discrete events a page can receive.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The page became active; fetch page 1.
    Activated,
    /// The user navigated to another page.
    PageChanged(PageTurn),
    /// The user edited the search term or the source filter.
    FilterChanged(FilterChange),
    /// The user asked to retry after a failure (or reload in place).
    Retried,
}

/// A fetch the controller has decided to issue.
///
/// The caller performs the actual I/O and hands the outcome back through
/// [`ViewController::resolve`] together with the request's generation.
#[derive(Debug, Clone, Copy)]
pub struct FetchRequest {
    /// 1-based page index to fetch.
    pub page: u32,
    /// Generation this request belongs to. Stale generations are
    /// rejected at resolve time.
    pub generation: u64,
}

/// Read-only view of the controller after a transition.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// `"loading"`, `"ready"`, or `"failed"`.
    pub state: &'static str,
    /// The failure reason, present only in the failed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    /// Current 1-based page index.
    pub page: u32,
    /// Total pages in the remote collection (1 while unknown).
    pub total_pages: u32,
    /// Items passing the current search and source filters, in fetch
    /// order.
    pub items: Vec<&'a ContentItem>,
    /// Distinct source labels on the current page, first-seen order.
    pub sources: Vec<String>,
    /// Current search term (may be empty).
    pub search_term: &'a str,
    /// Current source selection (`"all"` or a source label).
    pub selected_source: &'a str,
}

/// State machine for one content page.
#[derive(Debug)]
pub struct ViewController {
    phase: ViewPhase,
    page: u32,
    search_term: String,
    selected_source: String,
    generation: u64,
    disposed: bool,
}

impl ViewController {
    /// A fresh page: loading, page 1, no filters.
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            page: 1,
            search_term: String::new(),
            selected_source: ALL_SOURCES.to_string(),
            generation: 0,
            disposed: false,
        }
    }

    /// Apply one event. Returns the fetch the caller must perform, if
    /// the event requires one.
    ///
    /// Bounded navigation that is already at its bound returns `None`
    /// and changes nothing. Filter edits return `None` and take effect
    /// in the next [`Snapshot`].
    pub fn handle(&mut self, event: ViewEvent) -> Option<FetchRequest> {
        if self.disposed {
            warn!(?event, "Event after disposal ignored");
            return None;
        }
        match event {
            ViewEvent::Activated => Some(self.begin_fetch(1)),
            ViewEvent::Retried => Some(self.begin_fetch(self.page)),
            ViewEvent::PageChanged(turn) => {
                let target = self.navigation_target(turn)?;
                Some(self.begin_fetch(target))
            }
            ViewEvent::FilterChanged(change) => {
                match change {
                    FilterChange::Search(term) => self.search_term = term,
                    FilterChange::Source(source) => self.selected_source = source,
                }
                None
            }
        }
    }

    /// Hand a fetch outcome back to the controller.
    ///
    /// Returns whether the result was accepted. A result is discarded
    /// when the controller was disposed, or when a newer fetch has been
    /// issued since this one (the generation no longer matches).
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<PageResult, String>,
    ) -> bool {
        if self.disposed {
            debug!(generation, "Fetch resolved after disposal; discarded");
            return false;
        }
        if generation != self.generation {
            warn!(
                stale = generation,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        match outcome {
            Ok(result) => {
                info!(
                    page = result.page,
                    total = result.total_count,
                    items = result.items.len(),
                    "Page ready"
                );
                self.page = result.page;
                self.phase = ViewPhase::Ready(result);
            }
            Err(reason) => {
                info!(%reason, "Page failed");
                self.phase = ViewPhase::Failed(reason);
            }
        }
        true
    }

    /// Tear the page down. Any in-flight fetch's eventual outcome is
    /// discarded; no state mutation happens after this call.
    pub fn dispose(&mut self) {
        debug!("Controller disposed");
        self.disposed = true;
    }

    /// Read-only snapshot of the current state, with the filtered item
    /// subset and the source set recomputed from the held data.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let (state, error, total_pages, items, sources) = match &self.phase {
            ViewPhase::Loading => ("loading", None, 1, Vec::new(), Vec::new()),
            ViewPhase::Failed(reason) => ("failed", Some(reason.as_str()), 1, Vec::new(), Vec::new()),
            ViewPhase::Ready(result) => (
                "ready",
                None,
                result.total_pages(),
                paging::apply_filters(&result.items, &self.search_term, &self.selected_source),
                paging::source_set(&result.items),
            ),
        };
        Snapshot {
            state,
            error,
            page: self.page,
            total_pages,
            items,
            sources,
            search_term: &self.search_term,
            selected_source: &self.selected_source,
        }
    }

    /// Total pages once a fetch has succeeded; unknown before that.
    fn known_total_pages(&self) -> Option<u32> {
        match &self.phase {
            ViewPhase::Ready(result) => Some(result.total_pages()),
            _ => None,
        }
    }

    /// Resolve a navigation request to a target page, or `None` for a
    /// bounded no-op.
    fn navigation_target(&self, turn: PageTurn) -> Option<u32> {
        match turn {
            PageTurn::Previous => {
                if self.page <= 1 {
                    return None;
                }
                Some(self.page - 1)
            }
            PageTurn::Next => {
                if let Some(total) = self.known_total_pages() {
                    if self.page >= total {
                        return None;
                    }
                }
                Some(self.page + 1)
            }
            PageTurn::Goto(requested) => Some(match self.known_total_pages() {
                Some(total) => paging::clamp_page(requested, total),
                // Totals unknown before the first successful fetch; the
                // page result clamps on arrival.
                None => requested.max(1),
            }),
        }
    }

    fn begin_fetch(&mut self, page: u32) -> FetchRequest {
        self.generation += 1;
        self.page = page;
        self.phase = ViewPhase::Loading;
        debug!(page, generation = self.generation, "Entering loading state");
        FetchRequest {
            page,
            generation: self.generation,
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform the fetch a [`FetchRequest`] asks for and resolve it.
///
/// Failure messages keep the feed label up front (`Failed to fetch
/// articles: ...`) so the rendered notice names what went missing; the
/// underlying [`FetchError`] kind stays visible in the logs.
#[instrument(level = "info", skip_all, fields(feed = feed.label(), page = request.page))]
pub async fn run_fetch<F: ContentFeed>(
    controller: &mut ViewController,
    feed: &F,
    http: &HttpClient,
    page_size: u32,
    request: FetchRequest,
) {
    let outcome = feed
        .fetch_page(http, request.page, page_size)
        .await
        .map_err(|e: FetchError| {
            warn!(error = %e, "Feed fetch failed");
            format!("Failed to fetch {}: {e}", feed.label())
        });
    controller.resolve(request.generation, outcome);
}
