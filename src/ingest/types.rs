// src/ingest/types.rs
use chrono::NaiveDate;
use url::Url;

/// One candidate headline found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    pub title: String,
    pub url: String,
    /// Set when the adapter already knows the summary (e.g. video tiles);
    /// the article page is then not fetched and the date is today.
    pub fixed_summary: Option<&'static str>,
}

impl ListingItem {
    pub fn linked(title: String, url: String) -> Self {
        Self {
            title,
            url,
            fixed_summary: None,
        }
    }
}

/// Site-specific scraping rules. One implementation per news site; the
/// pipeline in [`crate::ingest`] does all fetching.
pub trait SourceAdapter: Send + Sync {
    /// Value written to the `source` column.
    fn label(&self) -> &'static str;

    /// Listing pages to fetch, in order.
    fn listing_urls(&self) -> Vec<Url>;

    /// Candidate items found in one listing page's markup. Relative links
    /// are resolved against `listing_url`.
    fn extract_items(&self, listing_url: &Url, markup: &str) -> Vec<ListingItem>;

    /// Publication date from an article page, `None` when the page has no
    /// recognizable date.
    fn extract_date(&self, article_markup: &str) -> Option<NaiveDate>;

    /// File-name friendly label for diagnostic dumps.
    fn slug(&self) -> String {
        self.label()
            .to_ascii_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }
}
