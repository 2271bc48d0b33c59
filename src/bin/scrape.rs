//! Scrape every configured source once and write the raw article CSV.

use news_categorizer::config::AppConfig;
use news_categorizer::ingest::fetch::HttpFetcher;
use news_categorizer::ingest::providers::default_adapters;
use news_categorizer::ingest::Scraper;
use news_categorizer::store;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    news_categorizer::init_tracing();

    let cfg = AppConfig::load()?;
    let scraper = Scraper::new(HttpFetcher::new()?).with_diagnostics_dir(&cfg.diagnostics_dir);

    let articles = scraper.run(&default_adapters()).await;
    store::write_raw(&articles, &cfg.raw_articles_path)?;

    info!(
        count = articles.len(),
        path = %cfg.raw_articles_path.display(),
        "scrape finished"
    );
    Ok(())
}
