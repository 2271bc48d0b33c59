// src/ingest/providers/toi.rs
//! Times of India homepage. Headlines live in several grid blocks, each with
//! its own markup; video tiles carry no article body.

use chrono::NaiveDate;
use scraper::Html;
use url::Url;

use super::{element_text, resolve_href, sel};
use crate::ingest::dates::parse_toi_timestamp;
use crate::ingest::types::{ListingItem, SourceAdapter};
use crate::ingest::VIDEO_SUMMARY;

const TOI_HOME: &str = "https://timesofindia.indiatimes.com";

#[derive(Debug, Clone, Default)]
pub struct TimesOfIndiaAdapter;

impl TimesOfIndiaAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SourceAdapter for TimesOfIndiaAdapter {
    fn label(&self) -> &'static str {
        "Times of India"
    }

    fn listing_urls(&self) -> Vec<Url> {
        Url::parse(TOI_HOME).into_iter().collect()
    }

    fn extract_items(&self, listing_url: &Url, markup: &str) -> Vec<ListingItem> {
        let doc = Html::parse_document(markup);
        let a = sel("a");
        let mut items = Vec::new();

        // grid articles, secondary link lists and plain headings: first link wins
        for block in ["div.col_l_6", "div.linktype2", "h2"] {
            for el in doc.select(&sel(block)) {
                let Some(link) = el.select(&a).next() else {
                    continue;
                };
                let Some(url) = link.value().attr("href").and_then(|h| resolve_href(listing_url, h))
                else {
                    continue;
                };
                items.push(ListingItem::linked(element_text(link), url));
            }
        }

        // video tiles: caption is the title
        let caption = sel("figcaption");
        for fig in doc.select(&sel("figure._YVis")) {
            let (Some(cap), Some(link)) = (fig.select(&caption).next(), fig.select(&a).next())
            else {
                continue;
            };
            let Some(url) = link.value().attr("href").and_then(|h| resolve_href(listing_url, h))
            else {
                continue;
            };
            items.push(ListingItem {
                title: element_text(cap),
                url,
                fixed_summary: Some(VIDEO_SUMMARY),
            });
        }

        items
    }

    fn extract_date(&self, article_markup: &str) -> Option<NaiveDate> {
        let doc = Html::parse_document(article_markup);
        let byline = doc.select(&sel("div.stroF.AZ4wj")).next()?;
        let last_span = byline.select(&sel("span")).last()?;
        parse_toi_timestamp(&element_text(last_span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <div class="col_l_6"><a href="/india/story-1.cms">Election results announced</a></div>
          <div class="col_l_6"><span>no link here</span></div>
          <figure class="_YVis"><a href="/videos/clip-9.cms"><img/></a><figcaption> Match highlights </figcaption></figure>
          <div class="linktype2"><a href="https://timesofindia.indiatimes.com/city/story-2.cms">City  news</a></div>
          <h2><a href="/world/story-3.cms">World update</a></h2>
        </body></html>"#;

    #[test]
    fn extracts_all_blocks_with_resolved_links() {
        let ad = TimesOfIndiaAdapter::new();
        let base = Url::parse(TOI_HOME).unwrap();
        let items = ad.extract_items(&base, LISTING);

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Election results announced", "City news", "World update", "Match highlights"]
        );
        assert_eq!(items[0].url, "https://timesofindia.indiatimes.com/india/story-1.cms");
        assert_eq!(items[1].url, "https://timesofindia.indiatimes.com/city/story-2.cms");
        assert_eq!(items[3].fixed_summary, Some(VIDEO_SUMMARY));
        assert!(items[..3].iter().all(|i| i.fixed_summary.is_none()));
    }

    #[test]
    fn date_comes_from_last_byline_span() {
        let ad = TimesOfIndiaAdapter::new();
        let page = r#"<div class="stroF AZ4wj"><span>TOI.in</span><span>Updated: Sep 29, 2024, 20:52 IST</span></div>"#;
        assert_eq!(ad.extract_date(page), NaiveDate::from_ymd_opt(2024, 9, 29));
    }

    #[test]
    fn missing_byline_yields_none() {
        let ad = TimesOfIndiaAdapter::new();
        assert_eq!(ad.extract_date("<p>no date</p>"), None);
    }
}
