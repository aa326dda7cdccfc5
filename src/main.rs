//! # Orbit News
//!
//! A terminal client for space content. It fetches news articles and
//! blog posts from the Spaceflight News API, NASA's Astronomy Picture of
//! the Day, and the ISRO spacecraft catalog, then pages, filters, and
//! renders them as text or JSON.
//!
//! ## Usage
//!
//! ```sh
//! orbit_news news --page 2 --search mars
//! orbit_news apod --nasa-api-key YOUR_KEY
//! orbit_news home
//! ```
//!
//! ## Architecture
//!
//! Data flows one direction through three layers:
//! 1. **Feeds**: one module per remote API; each maps its wire schema
//!    into normalized `ContentItem`/`PageResult` values
//! 2. **Controller**: a per-page state machine owning the fetch
//!    lifecycle, pagination, and filter selections
//! 3. **Outputs**: pure rendering of controller snapshots
//!
//! The controller discards stale fetch results by generation, so a page
//! change issued while an earlier fetch is still in flight always wins.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod client;
mod controller;
mod error;
mod feeds;
mod models;
mod outputs;
mod paging;

use cli::{Cli, FeedKind, OutputFormat};
use client::HttpClient;
use controller::{FilterChange, PageTurn, ViewController, ViewEvent, run_fetch};
use feeds::ContentFeed;
use feeds::apod::ApodFeed;
use feeds::missions::MissionFeed;
use feeds::spaceflight::SpaceflightFeed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("orbit_news starting up");

    let args = Cli::parse();
    debug!(?args.feed, args.page, ?args.page_size, "Parsed CLI arguments");

    let http = HttpClient::new();
    // a zero --page-size would make page arithmetic meaningless
    let page_size = args.page_size.unwrap_or(args.feed.default_page_size()).max(1);

    let output = match args.feed {
        FeedKind::News => show_feed(&SpaceflightFeed::articles(), &http, &args, page_size).await?,
        FeedKind::Blogs => show_feed(&SpaceflightFeed::blogs(), &http, &args, page_size).await?,
        FeedKind::Apod => {
            show_feed(&ApodFeed::new(args.nasa_api_key.clone()), &http, &args, page_size).await?
        }
        FeedKind::Missions => show_feed(&MissionFeed::new(), &http, &args, page_size).await?,
        FeedKind::Home => show_home(&http, &args).await?,
    };
    print!("{output}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Drive one content page from activation to its terminal state and
/// render the final snapshot.
async fn show_feed<F: ContentFeed>(
    feed: &F,
    http: &HttpClient,
    args: &Cli,
    page_size: u32,
) -> Result<String, Box<dyn Error>> {
    let mut controller = ViewController::new();

    if !args.search.is_empty() {
        controller.handle(ViewEvent::FilterChanged(FilterChange::Search(
            args.search.clone(),
        )));
    }
    if args.source != paging::ALL_SOURCES {
        controller.handle(ViewEvent::FilterChanged(FilterChange::Source(
            args.source.clone(),
        )));
    }

    // Activation asks for page 1. A deeper --page supersedes that request
    // before its fetch is dispatched, so exactly one request goes out and
    // the activation request is discarded as stale.
    let mut pending = controller.handle(ViewEvent::Activated);
    if args.page > 1 {
        if let Some(superseding) =
            controller.handle(ViewEvent::PageChanged(PageTurn::Goto(args.page)))
        {
            pending = Some(superseding);
        }
    }
    if let Some(request) = pending {
        run_fetch(&mut controller, feed, http, page_size, request).await;
    }

    let snapshot = controller.snapshot();
    let rendered = match args.format {
        OutputFormat::Text => outputs::text::render(&snapshot),
        OutputFormat::Json => {
            let mut rendered = outputs::json::render(&snapshot)?;
            rendered.push('\n');
            rendered
        }
    };
    Ok(rendered)
}

/// The home overview: featured blog posts and the picture of the day,
/// fetched concurrently. Each section owns its own controller and fails
/// independently, so one broken API never blanks the other section.
async fn show_home(http: &HttpClient, args: &Cli) -> Result<String, Box<dyn Error>> {
    let blogs_feed = SpaceflightFeed::blogs();
    let picture_feed = ApodFeed::new(args.nasa_api_key.clone());

    let mut blog_controller = ViewController::new();
    let mut picture_controller = ViewController::new();
    let blog_request = blog_controller.handle(ViewEvent::Activated);
    let picture_request = picture_controller.handle(ViewEvent::Activated);

    futures::join!(
        async {
            if let Some(request) = blog_request {
                run_fetch(
                    &mut blog_controller,
                    &blogs_feed,
                    http,
                    FeedKind::Home.default_page_size(),
                    request,
                )
                .await;
            }
        },
        async {
            if let Some(request) = picture_request {
                run_fetch(&mut picture_controller, &picture_feed, http, 1, request).await;
            }
        },
    );

    let blogs_snapshot = blog_controller.snapshot();
    let picture_snapshot = picture_controller.snapshot();

    match args.format {
        OutputFormat::Text => Ok(outputs::text::render_home(
            &blogs_snapshot,
            &picture_snapshot,
        )),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "featured_blogs": serde_json::to_value(&blogs_snapshot)?,
                "picture_of_the_day": serde_json::to_value(&picture_snapshot)?,
            });
            let mut rendered = serde_json::to_string_pretty(&value)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
