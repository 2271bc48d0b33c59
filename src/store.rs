// src/store.rs
//! Flat-file record store. Both files are UTF-8 CSV with a fixed header;
//! the header is written even when there are no rows.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::model::{today, Article, DATE_FORMAT};

pub const RAW_HEADER: [&str; 5] = ["title", "summary", "url", "source", "publication_date"];
pub const CATEGORIZED_HEADER: [&str; 6] = [
    "title",
    "summary",
    "url",
    "source",
    "publication_date",
    "category",
];

fn date_field(a: &Article) -> String {
    a.publication_date.format(DATE_FORMAT).to_string()
}

/// Scraper output: no category column.
pub fn write_raw<P: AsRef<Path>>(articles: &[Article], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(RAW_HEADER)?;
    for a in articles {
        w.write_record([
            a.title.as_str(),
            a.summary.as_str(),
            a.url.as_str(),
            a.source.as_str(),
            date_field(a).as_str(),
        ])?;
    }
    w.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "wrote raw articles");
    Ok(())
}

/// Categorizer output: trailing `category` column (empty when unassigned).
pub fn write_categorized<P: AsRef<Path>>(articles: &[Article], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(CATEGORIZED_HEADER)?;
    for a in articles {
        w.write_record([
            a.title.as_str(),
            a.summary.as_str(),
            a.url.as_str(),
            a.source.as_str(),
            date_field(a).as_str(),
            a.category.as_deref().unwrap_or_default(),
        ])?;
    }
    w.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "wrote categorized articles");
    Ok(())
}

/// On-disk row. The date stays text so a bad value can fall back instead of
/// failing the whole row.
#[derive(Debug, Deserialize)]
struct CsvRow {
    title: String,
    summary: String,
    url: String,
    source: String,
    publication_date: String,
    #[serde(default)]
    category: Option<String>,
}

impl CsvRow {
    fn into_article(self, line: usize, path: &Path, fallback: NaiveDate) -> Article {
        let publication_date =
            match NaiveDate::parse_from_str(self.publication_date.trim(), DATE_FORMAT) {
                Ok(d) => d,
                Err(_) => {
                    warn!(
                        value = %self.publication_date,
                        line,
                        path = %path.display(),
                        "unparseable publication_date, using today"
                    );
                    fallback
                }
            };
        Article {
            title: self.title,
            summary: self.summary,
            url: self.url,
            source: self.source,
            publication_date,
            category: self.category.filter(|c| !c.is_empty()),
        }
    }
}

/// Read either file shape in file order. Structurally broken rows (wrong
/// field count, bad encoding) are skipped with a warning; an unparseable
/// date becomes today's date. Failing to open the file is an error.
pub fn read_articles<P: AsRef<Path>>(path: P) -> Result<Vec<Article>> {
    let path = path.as_ref();
    let mut r = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let fallback = today();
    let mut out = Vec::new();
    for (i, row) in r.deserialize::<CsvRow>().enumerate() {
        match row {
            Ok(row) => out.push(row.into_article(i + 2, path, fallback)),
            Err(e) => {
                // +2: 1-based, after the header line
                warn!(error = %e, line = i + 2, path = %path.display(), "skipping malformed row");
            }
        }
    }
    info!(count = out.len(), path = %path.display(), "read articles");
    Ok(out)
}
