use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Best-effort recording of a widget initialization: a single POST with no
/// body, fired in the background. Failure is logged and swallowed, never
/// retried, and never allowed to touch the load path.
pub fn record_widget_init(endpoint: String) {
    tokio::spawn(async move {
        send_init_ping(&endpoint).await;
    });
}

/// Returns whether the ping was recorded. Split out so tests can await it.
pub async fn send_init_ping(endpoint: &str) -> bool {
    let client = match Client::builder().timeout(Duration::from_secs(10)).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("Telemetry client unavailable: {}", e);
            return false;
        }
    };

    match client.post(endpoint).send().await {
        Ok(response) if response.status().is_success() => {
            debug!("Recorded widget init");
            true
        }
        Ok(response) => {
            warn!("Telemetry endpoint returned {}", response.status());
            false
        }
        Err(e) => {
            warn!("Telemetry call failed: {}", e);
            false
        }
    }
}
