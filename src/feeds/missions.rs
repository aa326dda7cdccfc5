//! ISRO spacecraft mission catalog feed.
//!
//! The catalog endpoint returns the entire mission list as one bare JSON
//! array with no pagination support, so this feed fetches the full
//! catalog in its single HTTP call and windows it client-side into the
//! requested page.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use url::Url;

use crate::client::HttpClient;
use crate::error::FetchResult;
use crate::feeds::ContentFeed;
use crate::models::{ContentItem, PageResult};
use crate::paging;

const CATALOG_ENDPOINT: &str = "https://services.isrostats.in/api/spacecraft";

/// Source label attached to every mission item.
const MISSION_SOURCE: &str = "ISRO";

/// Feed over the ISRO spacecraft catalog.
#[derive(Debug, Clone)]
pub struct MissionFeed {
    endpoint: Url,
}

impl MissionFeed {
    pub fn new() -> Self {
        Self {
            endpoint: Url::parse(CATALOG_ENDPOINT).unwrap(),
        }
    }
}

impl Default for MissionFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFeed for MissionFeed {
    fn label(&self) -> &str {
        "missions"
    }

    #[instrument(level = "info", skip(self, http))]
    async fn fetch_page(
        &self,
        http: &HttpClient,
        page: u32,
        page_size: u32,
    ) -> FetchResult<PageResult> {
        let body = http.get_text(self.endpoint.clone()).await?;
        let catalog = parse_catalog(&body)?;
        info!(count = catalog.len(), "Fetched ISRO mission catalog");

        let total_count = catalog.len() as u64;
        let window = paging::page_window(&catalog, page, page_size).to_vec();
        Ok(PageResult::new(window, total_count, page, page_size))
    }
}

/// Decode the full catalog array into normalized items.
fn parse_catalog(body: &str) -> FetchResult<Vec<ContentItem>> {
    let missions: Vec<WireMission> = serde_json::from_str(body)?;
    Ok(missions.into_iter().map(WireMission::into_content_item).collect())
}

/// One catalog record as the API ships it. Only `_id` and `name` are
/// required; the remaining fields vary per mission.
#[derive(Debug, Deserialize)]
struct WireMission {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default, rename = "missionStatus")]
    mission_status: Option<String>,
    #[serde(default, rename = "launchDate")]
    launch_date: Option<String>,
    #[serde(default, rename = "launchVehicle")]
    launch_vehicle: Option<String>,
    #[serde(default, rename = "orbitType")]
    orbit_type: Option<String>,
    #[serde(default)]
    application: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl WireMission {
    fn into_content_item(self) -> ContentItem {
        // A mission with no recorded status is presented as ongoing.
        let status = self
            .mission_status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Ongoing".to_string());

        let mut parts: Vec<String> = Vec::new();
        if let Some(application) = self.application.filter(|s| !s.is_empty()) {
            parts.push(application);
        }
        if let Some(vehicle) = self.launch_vehicle.filter(|s| !s.is_empty()) {
            parts.push(format!("Launch vehicle: {vehicle}"));
        }
        if let Some(orbit) = self.orbit_type.filter(|s| !s.is_empty()) {
            parts.push(format!("Orbit: {orbit}"));
        }
        parts.push(format!("Status: {status}"));

        let published = self
            .launch_date
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|d| d.with_timezone(&Utc));

        ContentItem {
            id: self.id,
            title: self.name,
            summary: parts.join(" · "),
            published,
            source: MISSION_SOURCE.to_string(),
            image_url: self.image,
            link: self.link,
        }
    }
}
