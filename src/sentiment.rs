use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Largest absolute valence in the lexicon; used to scale polarity into [-1, 1].
const MAX_VALENCE: f32 = 5.0;

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lexicon score for a single lowercase word (0 when unknown).
    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }

    /// Scores every lexicon hit, flipping its sign when a negator sits in the
    /// previous 1..=3 tokens. Returns the signed valences of the hits only.
    fn valences(&self, text: &str) -> (Vec<i32>, usize) {
        // Collected up front: negation looks backwards by index.
        let tokens: Vec<String> = tokenize(text).collect();
        let mut hits = Vec::new();

        for i in 0..tokens.len() {
            let base = self.word_score(tokens[i].as_str());
            if base == 0 {
                continue;
            }
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            hits.push(if negated { -base } else { base });
        }

        (hits, tokens.len())
    }

    /// Returns (score, token count).
    pub fn score_text(&self, text: &str) -> (i32, usize) {
        let (hits, n) = self.valences(text);
        (hits.iter().sum(), n)
    }

    /// Polarity in `[-1.0, 1.0]`: mean valence of the matched words scaled by
    /// the lexicon range. Text without any lexicon hit is neutral (`0.0`).
    pub fn polarity(&self, text: &str) -> f32 {
        let (hits, _) = self.valences(text);
        if hits.is_empty() {
            return 0.0;
        }
        let mean = hits.iter().sum::<i32>() as f32 / hits.len() as f32;
        (mean / MAX_VALENCE).clamp(-1.0, 1.0)
    }
}

/// Alphanumeric tokens, lower-case.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "don't"
            | "doesn't"
            | "didn't"
            | "without"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_has_zero_polarity() {
        let a = SentimentAnalyzer::new();
        assert_eq!(a.polarity("Senate votes on new law Congress passed the policy today."), 0.0);
    }

    #[test]
    fn negative_words_give_negative_polarity() {
        let a = SentimentAnalyzer::new();
        let p = a.polarity("New chip disappoints everyone Critics say the device hate it.");
        assert!(p < 0.0, "expected negative polarity, got {p}");
        assert!(p >= -1.0);
    }

    #[test]
    fn negation_flips_sign() {
        let a = SentimentAnalyzer::new();
        let (plain, _) = a.score_text("the launch was good");
        let (negated, _) = a.score_text("the launch was not good");
        assert!(plain > 0);
        assert_eq!(negated, -plain);
        assert!(a.polarity("not good at all") < 0.0);
    }

    #[test]
    fn polarity_is_bounded() {
        let a = SentimentAnalyzer::new();
        let p = a.polarity("thrilled thrilled thrilled");
        assert!(p <= 1.0 && p > 0.0);
    }
}
