use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::normalize::RawRecord;

/// Where the newline-delimited feed lives. Anything that doesn't look like an
/// http(s) URL is treated as a filesystem path.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    pub fn from_str(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            FeedSource::Url(source.to_string())
        } else {
            FeedSource::File(PathBuf::from(source))
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct Loader {
    client: Client,
    source: FeedSource,
}

impl Loader {
    pub fn new(source: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("NewsDash/1.0 (Article Widget)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            source: FeedSource::from_str(source),
        }
    }

    /// Fetch and split the feed. Never returns an error: a transport failure is
    /// logged and yields an empty sequence so the widget always has something
    /// renderable.
    pub async fn load(&self) -> Vec<RawRecord> {
        let text = match self.fetch_text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to fetch feed: {}", e);
                return Vec::new();
            }
        };

        let records = parse_records(&text);
        info!("Loaded {} records from feed", records.len());
        records
    }

    async fn fetch_text(&self) -> Result<String, FetchError> {
        match &self.source {
            FeedSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let response = response.error_for_status()?;
                Ok(response.text().await?)
            }
            FeedSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

/// Split feed text into records: one JSON object per non-blank line. A line
/// that fails to parse is dropped and does not abort the lines after it.
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Dropping malformed feed line: {}", e);
            }
        }
    }
    records
}
