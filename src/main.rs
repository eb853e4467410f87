mod aggregate;
mod config;
mod loader;
mod normalize;
mod state;
mod telemetry;
mod widget;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::loader::Loader;
use crate::normalize::normalize;
use crate::widget::ArticleWidget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; the widget runs with defaults if none exists
    let config = Config::load_or_default("newsdash.toml");
    info!("Reading feed from {}", config.feed_url);

    // Best-effort init recording, isolated from the load path
    if let Some(endpoint) = config.telemetry_url.clone() {
        telemetry::record_widget_init(endpoint);
    }

    let loader = Loader::new(&config.feed_url, config.request_timeout_secs);
    let mut widget = ArticleWidget::new();

    // One load cycle: fetch, normalize, apply atomically
    let ticket = widget.begin_load();
    let articles: Vec<_> = loader.load().await.into_iter().map(normalize).collect();
    widget.apply_load(ticket, articles);

    info!(
        "Loaded {} articles across {} publications",
        widget.articles().len(),
        widget.groups().publications().len()
    );
    for (publication, articles) in widget.groups().iter() {
        info!("  {} ({})", publication, articles.len());
    }
    info!("Monthly counts ({}): {:?}", widget.selection().name(), widget.monthly_counts());

    Ok(())
}
