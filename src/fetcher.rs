use std::time::Duration;

use feed_rs::parser;
use futures::future::join_all;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::entry::{QualifiedEntry, RawFeedEntry};

/// Number of entries shown on the page.
pub const MAX_ENTRIES: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Status(u16),
    #[error("feed parse error: {0}")]
    Parse(#[from] parser::ParseFeedError),
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("homepage/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches every source concurrently and returns the newest qualified
    /// entries across all of them. A source that fails contributes nothing.
    pub async fn aggregate(&self, sources: &[String], limit: usize) -> Vec<QualifiedEntry> {
        let results = join_all(sources.iter().map(|url| self.fetch_source(url))).await;

        let mut entries = Vec::new();
        for (url, result) in sources.iter().zip(results) {
            match result {
                Ok(fetched) => entries.extend(fetched),
                Err(e) => warn!("Skipping feed {}: {}", url, e),
            }
        }

        select_entries(entries, limit)
    }

    pub async fn fetch_source(&self, url: &str) -> Result<Vec<RawFeedEntry>, FetchError> {
        info!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let parsed = parser::parse(&bytes[..])?;

        let entries: Vec<RawFeedEntry> = parsed.entries.into_iter().map(RawFeedEntry::from).collect();
        info!("Fetched {} entries from {}", entries.len(), url);
        Ok(entries)
    }
}

/// Keeps displayable entries, newest first, capped at `limit`.
///
/// The sort is stable, so entries with equal timestamps stay in the order
/// they were collected.
pub fn select_entries(raw: Vec<RawFeedEntry>, limit: usize) -> Vec<QualifiedEntry> {
    let mut entries: Vec<QualifiedEntry> = raw
        .into_iter()
        .filter_map(|entry| {
            if let Some(reason) = entry.qualify_error() {
                debug!(
                    "Dropping entry '{}': {}",
                    entry.title.as_deref().unwrap_or_default(),
                    reason
                );
                return None;
            }
            QualifiedEntry::try_from(entry).ok()
        })
        .collect();

    entries.sort_by(|a, b| b.published.cmp(&a.published));
    entries.truncate(limit);
    entries
}
