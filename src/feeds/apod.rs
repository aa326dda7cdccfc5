//! NASA Astronomy Picture of the Day feed.
//!
//! APOD is not a paginated collection; the endpoint returns a single
//! object for the current day. The feed wraps it as a one-item
//! [`PageResult`] (`total_count = 1`, `total_pages = 1`) so the rest of
//! the pipeline needs no special case.
//!
//! The endpoint requires an `api_key` query parameter. The key is an
//! opaque external credential passed through verbatim; nothing here
//! validates or rotates it.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use url::Url;

use crate::client::HttpClient;
use crate::error::FetchResult;
use crate::feeds::ContentFeed;
use crate::models::{ContentItem, PageResult};

const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Source label attached to every APOD item.
const APOD_SOURCE: &str = "NASA APOD";

/// Feed over NASA's Astronomy Picture of the Day.
#[derive(Debug, Clone)]
pub struct ApodFeed {
    endpoint: Url,
    api_key: String,
}

impl ApodFeed {
    /// Build the feed with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Url::parse(APOD_ENDPOINT).unwrap(),
            api_key: api_key.into(),
        }
    }
}

impl ContentFeed for ApodFeed {
    fn label(&self) -> &str {
        "image of the day"
    }

    #[instrument(level = "info", skip_all)]
    async fn fetch_page(
        &self,
        http: &HttpClient,
        _page: u32,
        _page_size: u32,
    ) -> FetchResult<PageResult> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("api_key", &self.api_key);

        let body = http.get_text(url).await?;
        let item = parse_item(&body)?;
        info!(id = %item.id, "Fetched astronomy picture of the day");
        Ok(PageResult::single(item))
    }
}

/// Decode the single APOD object into a [`ContentItem`].
fn parse_item(body: &str) -> FetchResult<ContentItem> {
    let wire: WireApod = serde_json::from_str(body)?;

    // Non-image entries (occasionally APOD is a video) keep their media
    // type visible in the summary since we only carry text and URLs.
    let summary = if wire.media_type.is_empty() || wire.media_type == "image" {
        wire.explanation
    } else {
        format!("[{}] {}", wire.media_type, wire.explanation)
    };

    let published = NaiveDate::parse_from_str(&wire.date, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap()));

    Ok(ContentItem {
        id: wire.date,
        title: wire.title,
        summary,
        published,
        source: APOD_SOURCE.to_string(),
        image_url: wire.url.clone(),
        link: wire.hdurl.or(wire.url),
    })
}

/// The APOD object as the API ships it. `date` doubles as the record id.
#[derive(Debug, Deserialize)]
struct WireApod {
    date: String,
    title: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    hdurl: Option<String>,
    #[serde(default)]
    media_type: String,
}
