use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled Article";
pub const DEFAULT_BODY: &str = "No further content available for this report.";
pub const UNKNOWN_PUBLICATION: &str = "Unknown";

/// One raw feed record as collected upstream. Every field is optional because
/// different collector revisions emit different subsets and names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub full_content: Option<String>,
    pub text_preview: Option<String>,
    pub publication: Option<String>,
    pub collected_at: Option<String>,
    pub url: Option<String>,
    pub image_path: Option<String>,
    pub image: Option<String>,
}

/// The canonical article shape everything downstream works with.
/// `title`, `body`, and `publication` are always non-empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub body: String,
    pub publication: String,
    pub collected_at: Option<String>,
    pub url: Option<String>,
    pub image_path: Option<String>,
}

// Empty strings count as absent, matching the collector's own fallback behavior.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn resolve(primary: Option<String>, fallback: Option<String>, default: &str) -> String {
    non_empty(primary)
        .or_else(|| non_empty(fallback))
        .unwrap_or_else(|| default.to_string())
}

/// Map a raw record onto the canonical article shape. Total function: missing or
/// malformed fields resolve to defaults, never to an error.
pub fn normalize(raw: RawRecord) -> Article {
    Article {
        title: resolve(raw.title, raw.headline, DEFAULT_TITLE),
        body: resolve(raw.full_content, raw.text_preview, DEFAULT_BODY),
        publication: non_empty(raw.publication)
            .unwrap_or_else(|| UNKNOWN_PUBLICATION.to_string()),
        collected_at: raw.collected_at,
        url: raw.url,
        image_path: non_empty(raw.image_path).or_else(|| non_empty(raw.image)),
    }
}
