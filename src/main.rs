//! Query service entrypoint.
//! Loads the categorized CSV once, then serves it read-only over Axum.

use anyhow::Context;
use tracing::info;

use news_categorizer::api::{self, AppState};
use news_categorizer::catalog::ArticleCatalog;
use news_categorizer::config::AppConfig;
use news_categorizer::metrics::Metrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    news_categorizer::init_tracing();

    let cfg = AppConfig::load()?;
    let catalog = ArticleCatalog::load(&cfg.categorized_articles_path)?;
    info!(
        count = catalog.len(),
        path = %cfg.categorized_articles_path.display(),
        "catalog loaded"
    );

    let metrics = Metrics::init(catalog.len())?;
    let app = api::router(AppState::new(catalog)).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.bind_addr))?;
    info!(addr = %cfg.bind_addr, "news api listening");

    axum::serve(listener, app).await.context("http server")?;
    Ok(())
}
