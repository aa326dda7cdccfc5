//! Human-readable terminal rendering.

use crate::controller::Snapshot;
use crate::models::ContentItem;

/// Longest summary excerpt shown per item.
const SUMMARY_EXCERPT_CHARS: usize = 160;

/// Render a snapshot as terminal text.
///
/// A failed page renders as a static notice replacing the content area;
/// a ready page renders a header, the filter line, and one block per
/// visible item.
pub fn render(snapshot: &Snapshot) -> String {
    match snapshot.state {
        "loading" => "Loading...\n".to_string(),
        "failed" => format!("{}\n", snapshot.error.unwrap_or("Failed to fetch content")),
        _ => render_ready(snapshot),
    }
}

/// Render the home overview: a featured selection of blog posts next to
/// the astronomy picture of the day. Each section fails independently.
pub fn render_home(blogs: &Snapshot, picture: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str("Latest Space News\n\n");
    match blogs.state {
        "ready" => {
            for (index, item) in blogs.items.iter().take(3).enumerate() {
                if index == 0 {
                    out.push_str(&render_item(item, "  * "));
                } else {
                    out.push_str(&render_item(item, "    "));
                }
            }
        }
        _ => {
            out.push_str(blogs.error.unwrap_or("Loading..."));
            out.push('\n');
        }
    }

    out.push_str("\nAstronomy Picture of the Day\n\n");
    match picture.state {
        "ready" => {
            for item in &picture.items {
                out.push_str(&render_item(item, "    "));
            }
        }
        _ => {
            out.push_str(picture.error.unwrap_or("Loading..."));
            out.push('\n');
        }
    }

    out
}

fn render_ready(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Page {} of {}  ({} shown)\n",
        snapshot.page,
        snapshot.total_pages,
        snapshot.items.len()
    ));
    if !snapshot.sources.is_empty() {
        out.push_str(&format!("Sources: {}\n", snapshot.sources.join(", ")));
    }
    if !snapshot.search_term.is_empty() || snapshot.selected_source != "all" {
        out.push_str(&format!(
            "Filters: search=\"{}\" source={}\n",
            snapshot.search_term, snapshot.selected_source
        ));
    }
    out.push('\n');

    if snapshot.items.is_empty() {
        out.push_str("No items match the current filters.\n");
        return out;
    }

    for item in &snapshot.items {
        out.push_str(&render_item(item, "    "));
    }
    out
}

fn render_item(item: &ContentItem, indent: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  [{}]\n",
        item.published_label(),
        item.title,
        item.source
    ));
    if !item.summary.is_empty() {
        out.push_str(&format!(
            "{}{}\n",
            indent,
            excerpt(&item.summary, SUMMARY_EXCERPT_CHARS)
        ));
    }
    if let Some(link) = &item.link {
        out.push_str(&format!("{}{}\n", indent, link));
    }
    out.push('\n');
    out
}

/// First `max` characters of a summary, with an ellipsis when cut.
/// Operates on characters, not bytes, so multibyte text never splits.
fn excerpt(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ViewController, ViewEvent};
    use crate::models::{ContentItem, PageResult};

    fn make_item(title: &str, summary: &str, source: &str) -> ContentItem {
        ContentItem {
            id: title.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            published: None,
            source: source.to_string(),
            image_url: None,
            link: Some("https://example.com/a".to_string()),
        }
    }

    fn ready_controller() -> ViewController {
        let mut controller = ViewController::new();
        let request = controller.handle(ViewEvent::Activated).unwrap();
        controller.resolve(
            request.generation,
            Ok(PageResult::new(
                vec![
                    make_item("Mars Rover Update", "Perseverance drills a core.", "NASA"),
                    make_item("Launch Delayed", "Weather pushed the window.", "SpaceX"),
                ],
                30,
                1,
                12,
            )),
        );
        controller
    }

    #[test]
    fn test_render_ready_shows_header_and_items() {
        let controller = ready_controller();
        let out = render(&controller.snapshot());
        assert!(out.contains("Page 1 of 3"));
        assert!(out.contains("Mars Rover Update"));
        assert!(out.contains("[NASA]"));
        assert!(out.contains("Sources: NASA, SpaceX"));
    }

    #[test]
    fn test_render_failed_shows_notice_only() {
        let mut controller = ViewController::new();
        let request = controller.handle(ViewEvent::Activated).unwrap();
        controller.resolve(
            request.generation,
            Err("Failed to fetch articles: network error".to_string()),
        );

        let out = render(&controller.snapshot());
        assert!(out.starts_with("Failed to fetch articles"));
        assert!(!out.contains("Page"));
    }

    #[test]
    fn test_render_empty_filter_result() {
        let mut controller = ready_controller();
        controller.handle(ViewEvent::FilterChanged(
            crate::controller::FilterChange::Search("jupiter".to_string()),
        ));
        let out = render(&controller.snapshot());
        assert!(out.contains("No items match"));
        assert!(out.contains("search=\"jupiter\""));
    }

    #[test]
    fn test_excerpt_cuts_on_characters() {
        assert_eq!(excerpt("short", 10), "short");
        let long = "x".repeat(200);
        let cut = excerpt(&long, 160);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 163);
        // multibyte text must not split
        let accented = "é".repeat(200);
        assert!(excerpt(&accented, 160).ends_with("..."));
    }

    #[test]
    fn test_render_home_combines_sections() {
        let blogs = ready_controller();
        let picture = ready_controller();
        let out = render_home(&blogs.snapshot(), &picture.snapshot());
        assert!(out.contains("Latest Space News"));
        assert!(out.contains("Astronomy Picture of the Day"));
    }
}
