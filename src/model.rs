// src/model.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used in both CSV files and API query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One scraped article. `category` is `None` until the categorizer runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: String,
    pub publication_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Article {
    /// Short content hash over the URL, stable across runs. Used in logs in
    /// place of titles.
    pub fn fingerprint(&self) -> String {
        url_fingerprint(&self.url)
    }
}

pub fn url_fingerprint(url: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Today's date in local time; the fallback publication date for a run.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
