//! Spaceflight News API v4 feeds (articles and blog posts).
//!
//! Both endpoints share the same paginated envelope:
//!
//! ```json
//! { "count": 30, "results": [ { "id": 1, "title": "...", ... } ] }
//! ```
//!
//! Pagination is server-side: the feed sends `limit`/`offset` query
//! parameters computed from the requested page, and derives the total
//! page count from the envelope's `count` field.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use url::Url;

use crate::client::HttpClient;
use crate::error::FetchResult;
use crate::feeds::ContentFeed;
use crate::models::{ContentItem, PageResult};

const ARTICLES_ENDPOINT: &str = "https://api.spaceflightnewsapi.net/v4/articles/";
const BLOGS_ENDPOINT: &str = "https://api.spaceflightnewsapi.net/v4/blogs/";

/// Feed over one of the Spaceflight News API collections.
#[derive(Debug, Clone)]
pub struct SpaceflightFeed {
    endpoint: Url,
    label: &'static str,
}

impl SpaceflightFeed {
    /// The news articles collection.
    pub fn articles() -> Self {
        Self {
            endpoint: Url::parse(ARTICLES_ENDPOINT).unwrap(),
            label: "articles",
        }
    }

    /// The blog posts collection.
    pub fn blogs() -> Self {
        Self {
            endpoint: Url::parse(BLOGS_ENDPOINT).unwrap(),
            label: "space blogs",
        }
    }
}

impl ContentFeed for SpaceflightFeed {
    fn label(&self) -> &str {
        self.label
    }

    #[instrument(level = "info", skip(self, http), fields(feed = self.label))]
    async fn fetch_page(
        &self,
        http: &HttpClient,
        page: u32,
        page_size: u32,
    ) -> FetchResult<PageResult> {
        let page = page.max(1);
        let offset = u64::from(page - 1) * u64::from(page_size);

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string())
            .append_pair("offset", &offset.to_string());

        let body = http.get_text(url).await?;
        let result = parse_page(&body, page, page_size)?;
        info!(
            count = result.items.len(),
            total = result.total_count,
            page = result.page,
            "Fetched Spaceflight News page"
        );
        Ok(result)
    }
}

/// Decode one envelope body into a [`PageResult`].
fn parse_page(body: &str, page: u32, page_size: u32) -> FetchResult<PageResult> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let items = envelope
        .results
        .into_iter()
        .map(WireItem::into_content_item)
        .collect::<Vec<_>>();
    Ok(PageResult::new(items, envelope.count, page, page_size))
}

#[derive(Debug, Deserialize)]
struct Envelope {
    count: u64,
    results: Vec<WireItem>,
}

/// One article/blog record as the API ships it. Unknown fields are
/// ignored; only `id` and `title` are required.
#[derive(Debug, Deserialize)]
struct WireItem {
    id: u64,
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    news_site: String,
    #[serde(default)]
    published_at: Option<String>,
}

impl WireItem {
    fn into_content_item(self) -> ContentItem {
        let published = self.published_at.as_deref().and_then(parse_timestamp);
        if published.is_none() {
            debug!(id = self.id, "Record has no parseable published_at");
        }
        ContentItem {
            id: self.id.to_string(),
            title: self.title,
            summary: self.summary,
            published,
            source: self.news_site,
            image_url: self.image_url,
            link: self.url,
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
