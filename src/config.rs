use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shortcuts::Site;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory the page and its JSON fixtures are served from
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub hacker_news: HackerNewsConfig,
    #[serde(default)]
    pub reddit: RedditConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "crate::shortcuts::default_sites")]
    pub shortcuts: Vec<Site>,
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "DailyHub/1.0 (Feed Aggregator)".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HackerNewsConfig {
    #[serde(default = "default_hn_base_url")]
    pub base_url: String,
    /// How many top stories to resolve
    #[serde(default = "default_hn_limit")]
    pub limit: usize,
}

fn default_hn_base_url() -> String {
    "https://hacker-news.firebaseio.com/v0".to_string()
}

fn default_hn_limit() -> usize {
    15
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_hn_base_url(),
            limit: default_hn_limit(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedditConfig {
    #[serde(default = "default_reddit_listing_url")]
    pub listing_url: String,
    #[serde(default = "default_reddit_limit")]
    pub limit: usize,
    /// Reddit's `t` parameter: hour, day, week, month, year or all
    #[serde(default = "default_reddit_window")]
    pub window: String,
    /// Reddit rejects requests without an identifying client header
    #[serde(default = "default_reddit_user_agent")]
    pub user_agent: String,
}

fn default_reddit_listing_url() -> String {
    "https://www.reddit.com/r/technology/top.json".to_string()
}

fn default_reddit_limit() -> usize {
    10
}

fn default_reddit_window() -> String {
    "day".to_string()
}

fn default_reddit_user_agent() -> String {
    "DailyHubBot/1.0.0".to_string()
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            listing_url: default_reddit_listing_url(),
            limit: default_reddit_limit(),
            window: default_reddit_window(),
            user_agent: default_reddit_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            hacker_news: HackerNewsConfig::default(),
            reddit: RedditConfig::default(),
            server: ServerConfig::default(),
            shortcuts: crate::shortcuts::default_sites(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like `load`, but a missing file yields the built-in defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn feeds_output(&self) -> PathBuf {
        self.public_dir.join("feeds-data.json")
    }

    pub fn shortcuts_output(&self) -> PathBuf {
        self.public_dir.join("shortcuts-config.json")
    }
}
