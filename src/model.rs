use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";
const REDDIT_HOST: &str = "https://www.reddit.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedSource {
    #[serde(rename = "HN")]
    HackerNews,
    Reddit,
    Design,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: FeedSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// The document written to `feeds-data.json` and read by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub updated_at: DateTime<Utc>,
    pub tech: Vec<FeedItem>,
    pub design: Vec<FeedItem>,
    pub news: Vec<FeedItem>,
}

/// Item document from the Hacker News `item/<id>.json` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HnStory {
    pub id: u64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub score: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RedditListing {
    pub data: RedditListingData,
}

#[derive(Debug, Deserialize)]
pub struct RedditListingData {
    pub children: Vec<RedditChild>,
}

#[derive(Debug, Deserialize)]
pub struct RedditChild {
    pub data: RedditPost,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedditPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub permalink: Option<String>,
    pub ups: Option<i64>,
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, RecordError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(RecordError::MissingField(field)),
    }
}

impl FeedItem {
    /// Stories without their own link (Ask HN, polls) point at the discussion page.
    pub fn from_hn_story(story: &HnStory) -> Result<Self, RecordError> {
        let title = required(story.title.as_deref(), "title")?;
        let url = match story.url.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => format!("{}{}", HN_ITEM_URL, story.id),
        };

        Ok(Self {
            id: story.id.to_string(),
            title,
            url,
            source: FeedSource::HackerNews,
            points: story.score,
        })
    }

    pub fn from_reddit_post(post: &RedditPost) -> Result<Self, RecordError> {
        let id = required(post.id.as_deref(), "id")?;
        let title = required(post.title.as_deref(), "title")?;
        let permalink = required(post.permalink.as_deref(), "permalink")?;

        Ok(Self {
            id,
            title,
            url: format!("{}{}", REDDIT_HOST, permalink),
            source: FeedSource::Reddit,
            points: post.ups,
        })
    }
}

impl FeedSnapshot {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
