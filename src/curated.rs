//! Hand-picked content for the design bucket, which has no live upstream.

use crate::model::{FeedItem, FeedSource};

const DESIGN_ITEMS: &[(&str, &str, &str, i64)] = &[
    (
        "d1",
        "Figma to Code: Best Practices for 2024",
        "https://example.com/figma-to-code",
        120,
    ),
    (
        "d2",
        "The Evolution of Minimalist Web Design",
        "https://example.com/minimalist-design",
        85,
    ),
    (
        "d3",
        "Why Typography Matters More Than You Think",
        "https://example.com/typography",
        210,
    ),
    (
        "d4",
        "Color Theory in Modern UI Design",
        "https://example.com/color-theory",
        156,
    ),
    (
        "d5",
        "Mastering Auto Layout in Figma",
        "https://example.com/figma-auto-layout",
        94,
    ),
];

pub fn design_items() -> Vec<FeedItem> {
    DESIGN_ITEMS
        .iter()
        .map(|&(id, title, url, points)| FeedItem {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            source: FeedSource::Design,
            points: Some(points),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_items_deterministic() {
        assert_eq!(design_items(), design_items());
    }

    #[test]
    fn test_design_items_content() {
        let items = design_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, "d1");
        assert_eq!(items[4].id, "d5");
        assert!(items.iter().all(|i| i.source == FeedSource::Design));
        assert!(items
            .iter()
            .all(|i| !i.id.is_empty() && !i.title.is_empty() && i.url.starts_with("https://")));
    }
}
