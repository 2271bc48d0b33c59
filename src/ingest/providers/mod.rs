// src/ingest/providers/mod.rs
//! Per-site adapters plus the small DOM helpers they share.

pub mod cnn;
pub mod toi;

use scraper::{ElementRef, Selector};
use url::Url;

use crate::ingest::normalize_text;
use crate::ingest::types::SourceAdapter;

pub use cnn::CnnAdapter;
pub use toi::TimesOfIndiaAdapter;

/// Every adapter the scrape binary runs, in run order.
pub fn default_adapters() -> Vec<Box<dyn SourceAdapter>> {
    vec![Box::new(TimesOfIndiaAdapter::new()), Box::new(CnnAdapter::new())]
}

/// Parse a selector literal. Only called with static, known-good selectors.
pub(crate) fn sel(css: &'static str) -> Selector {
    Selector::parse(css).expect("static css selector")
}

/// Visible text of an element, whitespace-collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalize_text(&el.text().collect::<String>())
}

/// Resolve an `href` against the listing page; absolute links pass through.
pub(crate) fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(|u| u.to_string())
}

/// Closest enclosing `<a>` of an element.
pub(crate) fn enclosing_link(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "a")
}
