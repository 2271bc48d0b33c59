// src/analyze/mod.rs
//! Categorization pipeline: preprocess → entities → sentiment → keyword scoring → label.

pub mod categories;
pub mod ner;
pub mod preprocess;

use metrics::counter;
use serde::Serialize;
use tracing::debug;

use crate::analyze::categories::{Category, CATEGORIES, REVIEWS_OR_OPINION};
use crate::analyze::ner::extract_entities_with;
use crate::analyze::preprocess::preprocess;
use crate::model::Article;
use crate::sentiment::SentimentAnalyzer;

/// Full breakdown of one categorization, for debugging and tests.
#[derive(Debug, Clone, Serialize)]
pub struct Categorization {
    pub label: String,
    /// Per-category score in table order.
    pub scores: Vec<(&'static str, u32)>,
    pub tokens: Vec<String>,
    pub entities: Vec<String>,
    pub polarity: f32,
}

#[derive(Debug, Clone)]
pub struct Categorizer {
    table: &'static [Category],
    sentiment: SentimentAnalyzer,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Categorizer {
    pub fn new() -> Self {
        Self::with_table(CATEGORIES)
    }

    pub fn with_table(table: &'static [Category]) -> Self {
        Self {
            table,
            sentiment: SentimentAnalyzer::new(),
        }
    }

    /// Label for a (title, summary) pair.
    pub fn categorize(&self, title: &str, summary: &str) -> String {
        self.explain(title, summary).label
    }

    pub fn explain(&self, title: &str, summary: &str) -> Categorization {
        let text = format!("{title} {summary}");

        let tokens = preprocess(&text);
        let table = self.table;
        let entities = extract_entities_with(&text, &|w| table.iter().any(|c| c.matches(w)));
        let polarity = self.sentiment.polarity(&text);

        let mut scores: Vec<(&'static str, u32)> =
            self.table.iter().map(|c| (c.label, 0)).collect();

        for token in &tokens {
            for (i, cat) in self.table.iter().enumerate() {
                if cat.matches(token) {
                    scores[i].1 += 1;
                }
            }
        }

        for entity in &entities {
            let folded = entity.to_lowercase();
            for (i, cat) in self.table.iter().enumerate() {
                if cat.matches(&folded) {
                    scores[i].1 += 1;
                }
            }
        }

        let label = select_label(title, &scores, polarity);
        debug!(%label, polarity, tokens = tokens.len(), entities = entities.len(), "categorized");

        Categorization {
            label,
            scores,
            tokens,
            entities,
            polarity,
        }
    }

    /// Label every article in input order, overwriting any existing category.
    pub fn categorize_all(&self, articles: &mut [Article]) {
        for a in articles.iter_mut() {
            a.category = Some(self.categorize(&a.title, &a.summary));
            debug!(id = %a.fingerprint(), category = ?a.category, "article labeled");
        }
        counter!("categorize_articles_total").increment(articles.len() as u64);
    }
}

/// First strictly-highest score wins; zero everywhere means unclassified.
fn select_label(title: &str, scores: &[(&'static str, u32)], polarity: f32) -> String {
    let mut best: Option<(&'static str, u32)> = None;
    for &(label, score) in scores {
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((label, score));
        }
    }

    match best {
        Some((label, score)) if score > 0 => {
            if label.contains("reviews") || polarity < 0.0 {
                REVIEWS_OR_OPINION.to_string()
            } else {
                label.to_string()
            }
        }
        _ => format!("general-{title} news"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_maximum_wins_ties() {
        let scores = [("politics", 2), ("technology", 2), ("sports", 1)];
        assert_eq!(select_label("t", &scores, 0.0), "politics");
    }

    #[test]
    fn zero_scores_fall_back_to_title() {
        let scores = [("politics", 0), ("technology", 0)];
        assert_eq!(select_label("Quiet day", &scores, 0.0), "general-Quiet day news");
    }

    #[test]
    fn zero_scores_ignore_negative_sentiment() {
        let scores = [("politics", 0)];
        assert_eq!(select_label("Bad day", &scores, -0.6), "general-Bad day news");
    }

    #[test]
    fn reviews_label_is_rewritten() {
        let scores = [("politics", 0), ("reviews", 3)];
        assert_eq!(select_label("t", &scores, 0.4), REVIEWS_OR_OPINION);
    }

    #[test]
    fn negative_sentiment_overrides_topic() {
        let scores = [("technology", 3)];
        assert_eq!(select_label("t", &scores, -0.1), REVIEWS_OR_OPINION);
    }
}
