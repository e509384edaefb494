use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::curated;
use crate::error::PersistError;
use crate::fetcher::{Fetcher, SourceOutcome};
use crate::model::FeedSnapshot;

/// Summary of one aggregation run, for logging by the caller.
#[derive(Debug)]
pub struct RunReport {
    pub path: PathBuf,
    pub updated_at: DateTime<Utc>,
    pub hacker_news: SourceOutcome,
    pub reddit: SourceOutcome,
}

impl RunReport {
    pub fn is_degraded(&self) -> bool {
        self.hacker_news.is_failed()
            || self.reddit.is_failed()
            || self.hacker_news.is_degraded()
            || self.reddit.is_degraded()
    }
}

pub fn build_snapshot(hacker_news: &SourceOutcome, reddit: &SourceOutcome) -> FeedSnapshot {
    FeedSnapshot {
        updated_at: Utc::now(),
        tech: hacker_news.items().to_vec(),
        design: curated::design_items(),
        news: reddit.items().to_vec(),
    }
}

pub async fn write_snapshot(snapshot: &FeedSnapshot, path: &Path) -> Result<(), PersistError> {
    let json = snapshot.to_pretty_json()?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Fetch every source and overwrite the snapshot at `output`.
///
/// Source failures are absorbed into the report; only the final write can fail.
pub async fn run(fetcher: &Fetcher, output: &Path) -> Result<RunReport, PersistError> {
    info!("Starting feed fetch...");

    let (hacker_news, reddit) = tokio::join!(fetcher.fetch_hacker_news(), fetcher.fetch_reddit());

    let snapshot = build_snapshot(&hacker_news, &reddit);
    if let Err(e) = write_snapshot(&snapshot, output).await {
        error!("Failed to write feed snapshot: {}", e);
        return Err(e);
    }

    let report = RunReport {
        path: output.to_path_buf(),
        updated_at: snapshot.updated_at,
        hacker_news,
        reddit,
    };

    if report.is_degraded() {
        warn!(
            "Degraded run: hacker_news failed={} dropped={}, reddit failed={} dropped={}",
            report.hacker_news.is_failed(),
            report.hacker_news.dropped(),
            report.reddit.is_failed(),
            report.reddit.dropped()
        );
    }
    info!(
        "Successfully updated feeds at {} ({} tech, {} design, {} news)",
        report.updated_at.to_rfc3339(),
        snapshot.tech.len(),
        snapshot.design.len(),
        snapshot.news.len()
    );
    info!("Saved to {}", report.path.display());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedItem, FeedSource};

    fn reddit_item(id: &str) -> FeedItem {
        FeedItem {
            id: id.to_string(),
            title: format!("Post {}", id),
            url: format!("https://www.reddit.com/r/technology/comments/{}/", id),
            source: FeedSource::Reddit,
            points: Some(10),
        }
    }

    #[test]
    fn test_failed_sources_yield_empty_buckets() {
        let failed = SourceOutcome::Failed {
            reason: "down".to_string(),
        };
        let snapshot = build_snapshot(&failed, &failed);

        assert!(snapshot.tech.is_empty());
        assert!(snapshot.news.is_empty());
        assert_eq!(snapshot.design.len(), 5);
    }

    #[test]
    fn test_buckets_are_independent() {
        let failed = SourceOutcome::Failed {
            reason: "down".to_string(),
        };
        let reddit = SourceOutcome::Fetched {
            items: vec![reddit_item("a"), reddit_item("b")],
            dropped: 0,
        };
        let snapshot = build_snapshot(&failed, &reddit);

        assert!(snapshot.tech.is_empty());
        assert_eq!(snapshot.news.len(), 2);
        assert_eq!(snapshot.news[0].id, "a");
    }

    #[tokio::test]
    async fn test_write_snapshot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feeds-data.json");
        std::fs::write(&path, "stale contents that are longer than nothing").unwrap();

        let empty = SourceOutcome::Fetched {
            items: vec![],
            dropped: 0,
        };
        let snapshot = build_snapshot(&empty, &empty);
        write_snapshot(&snapshot, &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(FeedSnapshot::from_json(&written).unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_write_snapshot_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("feeds-data.json");

        let empty = SourceOutcome::Fetched {
            items: vec![],
            dropped: 0,
        };
        let result = write_snapshot(&build_snapshot(&empty, &empty), &path).await;
        assert!(matches!(result, Err(PersistError::Write { .. })));
    }

    #[test]
    fn test_report_degraded_on_failure() {
        let report = RunReport {
            path: PathBuf::from("feeds-data.json"),
            updated_at: Utc::now(),
            hacker_news: SourceOutcome::Fetched {
                items: vec![],
                dropped: 0,
            },
            reddit: SourceOutcome::Failed {
                reason: "down".to_string(),
            },
        };
        assert!(report.is_degraded());
    }
}
