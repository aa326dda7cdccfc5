//! JSON output for machine consumption.
//!
//! Serializes the full snapshot, so downstream tooling sees the same
//! fields the text output does: state, pagination, the filtered items,
//! and the current filter selections.

use crate::controller::Snapshot;

/// Render a snapshot as pretty-printed JSON.
pub fn render(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ViewController, ViewEvent};
    use crate::models::{ContentItem, PageResult};

    #[test]
    fn test_ready_snapshot_round_trips_through_json() {
        let mut controller = ViewController::new();
        let request = controller.handle(ViewEvent::Activated).unwrap();
        controller.resolve(
            request.generation,
            Ok(PageResult::new(
                vec![ContentItem {
                    id: "101".to_string(),
                    title: "Mars Rover Update".to_string(),
                    summary: "A new core sample.".to_string(),
                    published: None,
                    source: "NASA".to_string(),
                    image_url: None,
                    link: None,
                }],
                30,
                1,
                12,
            )),
        );

        let rendered = render(&controller.snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["state"], "ready");
        assert_eq!(value["page"], 1);
        assert_eq!(value["total_pages"], 3);
        assert_eq!(value["items"][0]["title"], "Mars Rover Update");
        assert_eq!(value["sources"][0], "NASA");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_snapshot_carries_error() {
        let mut controller = ViewController::new();
        let request = controller.handle(ViewEvent::Activated).unwrap();
        controller.resolve(
            request.generation,
            Err("Failed to fetch articles: network error".to_string()),
        );

        let rendered = render(&controller.snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["state"], "failed");
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to fetch")
        );
    }
}
