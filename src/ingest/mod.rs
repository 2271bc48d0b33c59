// src/ingest/mod.rs
//! Scrape pipeline: listing pages → items → article pages → [`Article`] records.
//!
//! Everything here is sequential and failure-tolerant. A listing page that
//! fails is logged and skipped; an article page that fails degrades to the
//! placeholder summary and today's date. Nothing is retried.

pub mod dates;
pub mod fetch;
pub mod providers;
pub mod types;

use chrono::NaiveDate;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use scraper::Html;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::ingest::fetch::PageFetcher;
use crate::ingest::providers::sel;
use crate::ingest::types::{ListingItem, SourceAdapter};
use crate::model::{today, url_fingerprint, Article};

pub const SUMMARY_UNAVAILABLE: &str = "Summary not available.";
pub const VIDEO_SUMMARY: &str = "Video content available.";

/// Paragraphs joined into a summary.
const SUMMARY_PARAGRAPHS: usize = 3;

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("scrape_articles_total", "Articles produced by the scraper.");
        describe_counter!(
            "scrape_listing_errors_total",
            "Listing pages that failed to fetch."
        );
        describe_counter!(
            "scrape_summary_fallback_total",
            "Articles that got the placeholder summary."
        );
    });
}

/// Decode entities, collapse whitespace, trim.
pub fn normalize_text(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First three text-bearing `<p>` elements, trimmed and space-joined.
/// `None` when the page has no paragraph text at all.
pub fn extract_summary(markup: &str) -> Option<String> {
    let doc = Html::parse_document(markup);
    let parts: Vec<String> = doc
        .select(&sel("p"))
        .map(|p| normalize_text(&p.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .take(SUMMARY_PARAGRAPHS)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

pub struct Scraper<F: PageFetcher> {
    fetcher: F,
    today: NaiveDate,
    diagnostics_dir: Option<PathBuf>,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            today: today(),
            diagnostics_dir: None,
        }
    }

    /// Fallback publication date for this run.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Where empty listing pages are dumped for later inspection.
    pub fn with_diagnostics_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.diagnostics_dir = Some(dir.into());
        self
    }

    /// Run every adapter in order and concatenate their articles.
    pub async fn run(&self, adapters: &[Box<dyn SourceAdapter>]) -> Vec<Article> {
        ensure_metrics_described();
        let mut all = Vec::new();
        for adapter in adapters {
            let mut got = self.scrape_source(adapter.as_ref()).await;
            info!(source = adapter.label(), count = got.len(), "source done");
            all.append(&mut got);
        }
        all
    }

    /// All articles of one source. Never fails: errors are logged and the
    /// affected page contributes nothing.
    pub async fn scrape_source(&self, adapter: &dyn SourceAdapter) -> Vec<Article> {
        let mut out = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (page_no, listing_url) in adapter.listing_urls().into_iter().enumerate() {
            info!(source = adapter.label(), url = %listing_url, "fetching listing");
            let markup = match self.fetcher.fetch(listing_url.as_str()).await {
                Ok(m) => m,
                Err(e) => {
                    error!(error = ?e, source = adapter.label(), url = %listing_url, "listing fetch failed");
                    counter!("scrape_listing_errors_total").increment(1);
                    continue;
                }
            };

            let extracted = adapter.extract_items(&listing_url, &markup);
            if extracted.is_empty() {
                warn!(source = adapter.label(), url = %listing_url, "no articles found on listing page");
                self.dump_page_source(adapter, page_no, &markup).await;
                continue;
            }

            // repeats of earlier pages are expected, not a parse failure
            let items: Vec<ListingItem> = extracted
                .into_iter()
                .filter(|it| !it.title.is_empty())
                .filter(|it| seen.insert(it.url.clone()))
                .collect();

            for item in items {
                let article = self.build_article(adapter, item).await;
                info!(source = adapter.label(), id = %article.fingerprint(), "scraped article");
                out.push(article);
            }
        }

        counter!("scrape_articles_total").increment(out.len() as u64);
        out
    }

    async fn build_article(&self, adapter: &dyn SourceAdapter, item: ListingItem) -> Article {
        let (summary, publication_date) = match item.fixed_summary {
            Some(fixed) => (fixed.to_string(), self.today),
            None => self.summary_and_date(adapter, &item.url).await,
        };
        Article {
            title: item.title,
            summary,
            url: item.url,
            source: adapter.label().to_string(),
            publication_date,
            category: None,
        }
    }

    async fn summary_and_date(&self, adapter: &dyn SourceAdapter, url: &str) -> (String, NaiveDate) {
        match self.fetcher.fetch(url).await {
            Ok(markup) => {
                let summary = extract_summary(&markup).unwrap_or_else(|| {
                    counter!("scrape_summary_fallback_total").increment(1);
                    SUMMARY_UNAVAILABLE.to_string()
                });
                let date = adapter.extract_date(&markup).unwrap_or(self.today);
                (summary, date)
            }
            Err(e) => {
                error!(error = ?e, id = %url_fingerprint(url), "article fetch failed");
                counter!("scrape_summary_fallback_total").increment(1);
                (SUMMARY_UNAVAILABLE.to_string(), self.today)
            }
        }
    }

    async fn dump_page_source(&self, adapter: &dyn SourceAdapter, page_no: usize, markup: &str) {
        let Some(dir) = &self.diagnostics_dir else {
            return;
        };
        let name = if page_no == 0 {
            format!("{}_page_source.html", adapter.slug())
        } else {
            format!("{}_{}_page_source.html", adapter.slug(), page_no)
        };
        let path = dir.join(name);
        match tokio::fs::write(&path, markup).await {
            Ok(()) => info!(path = %path.display(), "dumped listing page for debugging"),
            Err(e) => warn!(error = %e, path = %path.display(), "could not dump listing page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_decodes_and_collapses() {
        assert_eq!(normalize_text("  Tom &amp; Jerry\n\t return "), "Tom & Jerry return");
    }

    #[test]
    fn summary_takes_first_three_text_paragraphs() {
        let page = "<p> One. </p><p>   </p><p>Two.</p><div><p>Three.</p></div><p>Four.</p>";
        assert_eq!(extract_summary(page).as_deref(), Some("One. Two. Three."));
    }

    #[test]
    fn summary_absent_without_paragraphs() {
        assert_eq!(extract_summary("<div>text only</div>"), None);
        assert_eq!(extract_summary("<p> </p>"), None);
    }
}
