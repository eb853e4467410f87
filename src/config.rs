use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path or http(s) URL of the newline-delimited feed
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Optional endpoint pinged once at startup
    #[serde(default)]
    pub telemetry_url: Option<String>,
    /// Feed request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_feed_url() -> String {
    "entity_intelligence_live_results.jsonl".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            telemetry_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
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

    /// Load, falling back to defaults when the file is absent or unreadable.
    /// The widget should still come up (and render an empty state) without a
    /// config file on disk.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Could not load {}, using defaults: {}",
                    path.as_ref().display(),
                    e
                );
                Config::default()
            }
        }
    }
}
