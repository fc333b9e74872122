use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Feed sources used when the config file does not list any.
pub const DEFAULT_FEEDS: [&str; 4] = [
    "https://zenn.dev/riaf/feed",
    "https://qiita.com/riaf/feed",
    "https://medium.com/feed/@riaf",
    "https://riaf.hatenablog.com/feed",
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Per-feed fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_feeds")]
    pub feeds: Vec<String>,
    pub profile: Profile,
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_max_entries() -> usize {
    20
}

fn default_feeds() -> Vec<String> {
    DEFAULT_FEEDS.iter().map(|url| url.to_string()).collect()
}

/// Static information about the site owner.
#[derive(Debug, Deserialize, Clone)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub additional_name: String,
    pub image: String,
    #[serde(default)]
    pub job_title: String,
    pub url: String,
    #[serde(default)]
    pub hometown: String,
    #[serde(default)]
    pub works_for: Vec<String>,
    #[serde(default)]
    pub member_of: Vec<String>,
    #[serde(default)]
    pub same_as: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub about: Vec<AboutSection>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AboutSection {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Profile {
    /// schema.org `Person` description embedded in the page as JSON-LD.
    pub fn json_ld(&self) -> serde_json::Value {
        serde_json::json!({
            "@context": "http://schema.org/",
            "@type": "Person",
            "name": self.name,
            "additionalName": self.additional_name,
            "image": self.image,
            "jobTitle": self.job_title,
            "url": self.url,
            "birthPlace": self.hometown,
            "worksFor": self.works_for,
            "memberOf": self.member_of,
            "sameAs": self.same_as,
        })
    }
}
