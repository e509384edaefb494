use std::time::Duration;

use futures::future::join_all;
use reqwest::{header::USER_AGENT, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::config::{Config, HackerNewsConfig, RedditConfig};
use crate::error::FetchError;
use crate::model::{FeedItem, HnStory, RedditListing};

/// What one source produced. `Failed` still merges as an empty bucket, but
/// lets the caller tell an empty upstream from a broken one.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    Fetched {
        items: Vec<FeedItem>,
        /// Records that were requested or listed but rejected
        dropped: usize,
    },
    Failed {
        reason: String,
    },
}

impl SourceOutcome {
    pub fn items(&self) -> &[FeedItem] {
        match self {
            SourceOutcome::Fetched { items, .. } => items,
            SourceOutcome::Failed { .. } => &[],
        }
    }

    pub fn into_items(self) -> Vec<FeedItem> {
        match self {
            SourceOutcome::Fetched { items, .. } => items,
            SourceOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SourceOutcome::Failed { .. })
    }

    pub fn dropped(&self) -> usize {
        match self {
            SourceOutcome::Fetched { dropped, .. } => *dropped,
            SourceOutcome::Failed { .. } => 0,
        }
    }

    /// More than half of the requested records were lost
    pub fn is_degraded(&self) -> bool {
        match self {
            SourceOutcome::Fetched { items, dropped } => *dropped > items.len(),
            SourceOutcome::Failed { .. } => false,
        }
    }
}

pub struct Fetcher {
    client: Client,
    hacker_news: HackerNewsConfig,
    reddit: RedditConfig,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            hacker_news: config.hacker_news.clone(),
            reddit: config.reddit.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn fetch_hacker_news(&self) -> SourceOutcome {
        match self.hacker_news_top_ids().await {
            Ok(ids) => {
                let requested = ids.len();
                let stories = join_all(ids.into_iter().map(|id| self.hacker_news_item(id))).await;
                let items: Vec<FeedItem> = stories.into_iter().flatten().collect();
                let dropped = requested - items.len();

                info!(
                    "Fetched {} Hacker News stories ({} dropped)",
                    items.len(),
                    dropped
                );
                SourceOutcome::Fetched { items, dropped }
            }
            Err(e) => {
                error!("Error fetching Hacker News: {}", e);
                SourceOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn hacker_news_top_ids(&self) -> Result<Vec<u64>, FetchError> {
        let url = format!("{}/topstories.json", self.hacker_news.base_url);
        let mut ids: Vec<u64> = Self::get_json(self.client.get(&url)).await?;
        ids.truncate(self.hacker_news.limit);
        Ok(ids)
    }

    /// A failed or unusable story is logged and skipped.
    async fn hacker_news_item(&self, id: u64) -> Option<FeedItem> {
        let url = format!("{}/item/{}.json", self.hacker_news.base_url, id);

        // Deleted items come back as a literal `null`
        let story = match Self::get_json::<Option<HnStory>>(self.client.get(&url)).await {
            Ok(Some(story)) => story,
            Ok(None) => {
                warn!("Hacker News story {} does not exist", id);
                return None;
            }
            Err(e) => {
                warn!("Error fetching HN story {}: {}", id, e);
                return None;
            }
        };

        match FeedItem::from_hn_story(&story) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping HN story {}: {}", id, e);
                None
            }
        }
    }

    pub async fn fetch_reddit(&self) -> SourceOutcome {
        let request = self
            .client
            .get(&self.reddit.listing_url)
            .query(&[
                ("limit", self.reddit.limit.to_string()),
                ("t", self.reddit.window.clone()),
            ])
            .header(USER_AGENT, self.reddit.user_agent.as_str());

        let listing: RedditListing = match Self::get_json(request).await {
            Ok(listing) => listing,
            Err(e) => {
                error!("Error fetching Reddit: {}", e);
                return SourceOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let mut items = Vec::new();
        let mut dropped = 0;
        for child in listing.data.children.iter().take(self.reddit.limit) {
            match FeedItem::from_reddit_post(&child.data) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!("Skipping Reddit post: {}", e);
                    dropped += 1;
                }
            }
        }

        info!("Fetched {} Reddit posts ({} dropped)", items.len(), dropped);
        SourceOutcome::Fetched { items, dropped }
    }
}
