//! The "hot shortcuts" list shown on the page's speed dial.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::PersistError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutsDocument {
    pub hot_shortcuts: Vec<Shortcut>,
    pub updated_at: DateTime<Utc>,
}

const HOT_SITES: &[(&str, &str)] = &[
    ("DeepSeek", "https://www.deepseek.com"),
    ("GitHub", "https://github.com"),
    ("Bilibili", "https://www.bilibili.com"),
    ("ChatGPT", "https://chat.openai.com"),
    ("Gmail", "https://mail.google.com"),
    ("YouTube", "https://www.youtube.com"),
    ("V2EX", "https://www.v2ex.com"),
    ("Product Hunt", "https://www.producthunt.com"),
    ("Weibo", "https://weibo.com"),
    ("Reddit", "https://www.reddit.com"),
];

pub fn default_sites() -> Vec<Site> {
    HOT_SITES
        .iter()
        .map(|&(name, url)| Site {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

pub fn build(sites: &[Site]) -> ShortcutsDocument {
    let hot_shortcuts = sites
        .iter()
        .enumerate()
        .map(|(index, site)| Shortcut {
            id: format!("system-{}", index + 1),
            name: site.name.clone(),
            url: site.url.clone(),
        })
        .collect();

    ShortcutsDocument {
        hot_shortcuts,
        updated_at: Utc::now(),
    }
}

pub async fn publish(sites: &[Site], path: &Path) -> Result<ShortcutsDocument, PersistError> {
    let document = build(sites);
    let json = serde_json::to_string_pretty(&document)?;

    if let Err(source) = tokio::fs::write(path, json).await {
        error!("Failed to update shortcuts: {}", source);
        return Err(PersistError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        "Updated {} with {} items",
        path.display(),
        document.hot_shortcuts.len()
    );
    Ok(document)
}
