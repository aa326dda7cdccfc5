//! Command-line interface definitions for orbit_news.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. The NASA API key can be provided via flag or environment
//! variable; it is an opaque credential passed through to the APOD
//! endpoint verbatim.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the orbit_news application.
///
/// # Examples
///
/// ```sh
/// # First page of space news
/// orbit_news news
///
/// # Page 2, narrowed to one publisher
/// orbit_news news --page 2 --source NASA
///
/// # Search within the current page of blog posts
/// orbit_news blogs --search starship
///
/// # Picture of the day with a personal API key
/// orbit_news apod --nasa-api-key YOUR_KEY
///
/// # Machine-readable output
/// orbit_news missions --format json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Which content feed to show
    #[arg(value_enum)]
    pub feed: FeedKind,

    /// 1-based page index (out-of-range values are clamped)
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Items per page (defaults to the feed's native size)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Case-insensitive search over titles and summaries on the fetched page
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show items from this source label ("all" disables the filter)
    #[arg(long, default_value = "all")]
    pub source: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// NASA API key for the astronomy picture of the day
    #[arg(long, env = "NASA_API_KEY", default_value = "DEMO_KEY")]
    pub nasa_api_key: String,
}

/// The content feeds the client can show.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedKind {
    /// Space news articles (Spaceflight News API)
    News,
    /// Space blog posts (Spaceflight News API)
    Blogs,
    /// NASA's astronomy picture of the day
    Apod,
    /// The ISRO spacecraft catalog
    Missions,
    /// Overview: featured blog posts plus the picture of the day
    Home,
}

impl FeedKind {
    /// The page size each feed uses when `--page-size` is not given.
    pub fn default_page_size(self) -> u32 {
        match self {
            FeedKind::News | FeedKind::Blogs | FeedKind::Home => 12,
            FeedKind::Apod => 1,
            FeedKind::Missions => 9,
        }
    }
}

/// Output rendering choices.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["orbit_news", "news"]);
        assert_eq!(cli.feed, FeedKind::News);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.page_size, None);
        assert_eq!(cli.search, "");
        assert_eq!(cli.source, "all");
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::parse_from([
            "orbit_news",
            "missions",
            "--page",
            "3",
            "--page-size",
            "6",
            "--search",
            "chandrayaan",
            "--format",
            "json",
        ]);
        assert_eq!(cli.feed, FeedKind::Missions);
        assert_eq!(cli.page, 3);
        assert_eq!(cli.page_size, Some(6));
        assert_eq!(cli.search, "chandrayaan");
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["orbit_news", "blogs", "-p", "2", "-s", "starship"]);
        assert_eq!(cli.feed, FeedKind::Blogs);
        assert_eq!(cli.page, 2);
        assert_eq!(cli.search, "starship");
    }

    #[test]
    fn test_default_page_sizes() {
        assert_eq!(FeedKind::News.default_page_size(), 12);
        assert_eq!(FeedKind::Missions.default_page_size(), 9);
        assert_eq!(FeedKind::Apod.default_page_size(), 1);
    }
}
