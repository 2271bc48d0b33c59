//! Label every scraped article and write the categorized CSV.

use news_categorizer::config::AppConfig;
use news_categorizer::store;
use news_categorizer::Categorizer;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    news_categorizer::init_tracing();

    let cfg = AppConfig::load()?;
    let mut articles = store::read_articles(&cfg.raw_articles_path)?;

    Categorizer::new().categorize_all(&mut articles);
    store::write_categorized(&articles, &cfg.categorized_articles_path)?;

    info!(
        count = articles.len(),
        path = %cfg.categorized_articles_path.display(),
        "articles categorized"
    );
    Ok(())
}
