// src/ingest/providers/cnn.rs
//! CNN International: the homepage and the `/articles` index use different
//! headline markup, so items are extracted per page.

use chrono::NaiveDate;
use scraper::Html;
use url::Url;

use super::{element_text, enclosing_link, resolve_href, sel};
use crate::ingest::dates::parse_cnn_timestamp;
use crate::ingest::types::{ListingItem, SourceAdapter};

const CNN_HOME: &str = "https://edition.cnn.com/";
const CNN_ARTICLES: &str = "https://edition.cnn.com/articles";

#[derive(Debug, Clone, Default)]
pub struct CnnAdapter;

impl CnnAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Homepage: `div.container__headline` holds the text, the card's
    /// enclosing `<a>` holds the link.
    fn homepage_items(&self, base: &Url, doc: &Html) -> Vec<ListingItem> {
        let text_sel = sel("span.container__headline-text");
        let mut items = Vec::new();
        for headline in doc.select(&sel("div.container__headline")) {
            let Some(text) = headline.select(&text_sel).next() else {
                continue;
            };
            let Some(url) = enclosing_link(headline)
                .and_then(|a| a.value().attr("href"))
                .and_then(|h| resolve_href(base, h))
            else {
                continue;
            };
            items.push(ListingItem::linked(element_text(text), url));
        }
        items
    }

    /// Article index: `h3.cd__headline > a`.
    fn article_index_items(&self, base: &Url, doc: &Html) -> Vec<ListingItem> {
        let a = sel("a");
        let mut items = Vec::new();
        for h3 in doc.select(&sel("h3.cd__headline")) {
            let Some(link) = h3.select(&a).next() else {
                continue;
            };
            let Some(url) = link.value().attr("href").and_then(|h| resolve_href(base, h)) else {
                continue;
            };
            items.push(ListingItem::linked(element_text(link), url));
        }
        items
    }
}

impl SourceAdapter for CnnAdapter {
    fn label(&self) -> &'static str {
        "CNN"
    }

    fn listing_urls(&self) -> Vec<Url> {
        [CNN_HOME, CNN_ARTICLES]
            .iter()
            .filter_map(|u| Url::parse(u).ok())
            .collect()
    }

    fn extract_items(&self, listing_url: &Url, markup: &str) -> Vec<ListingItem> {
        let doc = Html::parse_document(markup);
        if listing_url.path().trim_end_matches('/') == "/articles" {
            self.article_index_items(listing_url, &doc)
        } else {
            self.homepage_items(listing_url, &doc)
        }
    }

    fn extract_date(&self, article_markup: &str) -> Option<NaiveDate> {
        let doc = Html::parse_document(article_markup);
        let stamp = doc.select(&sel("div.timestamp.vossi-timestamp")).next()?;
        parse_cnn_timestamp(&element_text(stamp))
    }
}
