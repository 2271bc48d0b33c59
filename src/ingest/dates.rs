// src/ingest/dates.rs
//! Publication-date parsing for the site formats we know about.
//! Every parser returns `None` on mismatch; callers fall back to today.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// "8:52 PM EDT, Sun September 29, 2024", optionally prefixed "Updated"/"Published"
static RE_CNN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:updated|published)?\s*\d{1,2}:\d{2}\s*[ap]m\s+[a-z]{2,5},\s+[a-z]{3,9}\.?\s+([a-z]+)\s+(\d{1,2}),\s+(\d{4})$",
    )
    .expect("cnn timestamp regex")
});

// "Sep 29, 2024, 20:52 IST" (time and zone optional)
static RE_TOI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z]+)\.?\s+(\d{1,2}),\s*(\d{4})(?:,\s*\d{1,2}:\d{2}(?:\s*[a-z]{2,5})?)?$")
        .expect("toi timestamp regex")
});

/// Build a date from textual month (full or abbreviated), day and year.
fn month_day_year(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let s = format!("{month} {day} {year}");
    NaiveDate::parse_from_str(&s, "%B %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(&s, "%b %d %Y"))
        .ok()
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// CNN article timestamp, e.g. `8:52 PM EDT, Sun September 29, 2024`.
pub fn parse_cnn_timestamp(text: &str) -> Option<NaiveDate> {
    let text = collapse_ws(text);
    let caps = RE_CNN.captures(&text)?;
    month_day_year(&caps[1], &caps[2], &caps[3])
}

/// Times of India byline date, e.g. `Updated: Sep 29, 2024, 20:52 IST`.
pub fn parse_toi_timestamp(text: &str) -> Option<NaiveDate> {
    let text = collapse_ws(text);
    let text = text
        .trim()
        .trim_start_matches("Updated:")
        .trim_start_matches("Published:")
        .trim();
    let caps = RE_TOI.captures(text)?;
    month_day_year(&caps[1], &caps[2], &caps[3])
}
