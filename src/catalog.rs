use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct TopicRecord {
    name: String,
    #[serde(default)]
    slug: Option<String>,
}

/// A topic as linked from the site navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub name: String,
    pub slug: String,
}

impl Topic {
    fn new(name: &str, slug: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }
}

impl From<TopicRecord> for Topic {
    fn from(record: TopicRecord) -> Self {
        let slug = match record.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => derive_slug(&record.name),
        };

        Topic {
            name: record.name,
            slug,
        }
    }
}

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Lowercase `name` with each whitespace run replaced by `-`.
///
/// Nothing is trimmed, so leading or trailing whitespace becomes a dash.
pub fn derive_slug(name: &str) -> String {
    WHITESPACE_REGEX
        .get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Topics shown when the content API has none to offer.
pub fn fallback_topics() -> Vec<Topic> {
    vec![
        Topic::new("Salah", "salah"),
        Topic::new("Zakat", "zakat"),
        Topic::new("Business", "business"),
        Topic::new("Marriage", "marriage"),
        Topic::new("Women", "women"),
        Topic::new("Finance", "finance"),
    ]
}

/// Client for the topic list of the content API.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl TopicCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.api_timeout_secs))
    }

    /// Fetch `GET {base}/topics`.
    ///
    /// The API answers with an array of `{ _id, name, slug }`; anything else
    /// is an error.
    pub async fn fetch(&self) -> Result<Vec<Topic>> {
        let url = format!("{}/topics", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to content API")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Content API error ({}) for {}", status, url);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse content API response")?;

        if !body.is_array() {
            bail!("Content API returned a non-array topic list");
        }

        let records: Vec<TopicRecord> =
            serde_json::from_value(body).context("Malformed topic record")?;

        Ok(records.into_iter().map(Topic::from).collect())
    }

    /// Topics from the API, or [`fallback_topics`] when the call fails or
    /// returns an empty list.
    pub async fn topics_or_fallback(&self) -> Vec<Topic> {
        match self.fetch().await {
            Ok(topics) if !topics.is_empty() => {
                debug!("Loaded {} topics from content API", topics.len());
                topics
            }
            Ok(_) => {
                debug!("Content API returned no topics, using fallback list");
                fallback_topics()
            }
            Err(e) => {
                warn!("Failed to load topics, using fallback list: {:#}", e);
                fallback_topics()
            }
        }
    }
}
