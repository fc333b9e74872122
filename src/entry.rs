use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use url::Url;

/// Maximum number of characters kept from an entry's description.
pub const DESCRIPTION_LIMIT: usize = 200;

const ELLIPSIS: char = '…';

// Quoted attribute values are consumed whole so a `>` inside them does not
// close the tag.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<("[^"]*"|'[^']*'|[^'">])*>"#).unwrap());

/// One item as it came out of a feed. Upstream feeds vary, so nothing is guaranteed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeedEntry {
    pub title: Option<String>,
    pub links: Vec<String>,
    pub published: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl From<feed_rs::model::Entry> for RawFeedEntry {
    fn from(entry: feed_rs::model::Entry) -> Self {
        let links = entry
            .links
            .into_iter()
            .map(|link| link.href.trim().to_string())
            .filter(|href| !href.is_empty())
            .collect();

        Self {
            title: entry.title.map(|t| t.content),
            links,
            published: entry.published,
            description: entry.summary.map(|s| s.content),
            content: entry.content.and_then(|c| c.body),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QualifyError {
    #[error("entry has no link")]
    MissingLink,
    #[error("entry has no publication date")]
    MissingPublished,
}

/// An entry that can be displayed: it has at least one link and a
/// publication timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedEntry {
    pub title: Option<String>,
    links: Vec<String>,
    pub published: DateTime<Utc>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl QualifiedEntry {
    /// Destination URL of the entry.
    pub fn url(&self) -> &str {
        &self.links[0]
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }
}

impl RawFeedEntry {
    /// Why this entry cannot be displayed, if anything.
    pub fn qualify_error(&self) -> Option<QualifyError> {
        if self.links.is_empty() {
            Some(QualifyError::MissingLink)
        } else if self.published.is_none() {
            Some(QualifyError::MissingPublished)
        } else {
            None
        }
    }
}

impl TryFrom<RawFeedEntry> for QualifiedEntry {
    type Error = QualifyError;

    fn try_from(raw: RawFeedEntry) -> Result<Self, Self::Error> {
        if let Some(reason) = raw.qualify_error() {
            return Err(reason);
        }
        let published = raw.published.ok_or(QualifyError::MissingPublished)?;

        Ok(Self {
            title: raw.title,
            links: raw.links,
            published,
            description: raw.description,
            content: raw.content,
        })
    }
}

/// What the page shows for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub description: String,
}

pub fn summarize(entry: &QualifiedEntry) -> EntrySummary {
    let url = entry.url().to_string();
    let source = entry
        .content
        .as_deref()
        .filter(|content| !content.is_empty())
        .or(entry.description.as_deref())
        .unwrap_or_default();

    EntrySummary {
        title: entry.title.clone().unwrap_or_default(),
        domain: extract_domain(&url),
        description: truncate_description(&strip_tags(source)),
        url,
    }
}

/// Hostname of `url`, or an empty string when it cannot be parsed.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Cuts `text` to [`DESCRIPTION_LIMIT`] characters and always ends it with
/// a single ellipsis.
pub fn truncate_description(text: &str) -> String {
    let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    let mut description = cut
        .trim_end_matches(|c: char| c.is_whitespace() || c == ELLIPSIS)
        .to_string();
    description.push(ELLIPSIS);
    description
}
