//! Daily Hub - start page data tools
//!
//! This crate generates the JSON documents a personal start page reads:
//! an aggregated news snapshot and a hot-shortcut list. It can also serve
//! the page's public directory over HTTP.

pub mod aggregator;
pub mod config;
pub mod curated;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod routes;
pub mod shortcuts;
