// src/analyze/preprocess.rs
//! Text preprocessing for keyword matching: lowercase → word tokens →
//! noun lemma → stop-word removal.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("../../stopwords_en.txt")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
});

/// Irregular plurals the suffix rules below would mangle.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("women", "woman"),
        ("men", "man"),
        ("children", "child"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("halves", "half"),
    ])
});

/// Words that already are their own base form despite a plural-looking suffix.
static INVARIANT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "news", "series", "species", "means", "always", "perhaps", "whereas", "sometimes",
        "olympics", "athletics", "economics", "politics", "physics", "mathematics", "ethics",
        "data",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Word tokens in order, lowercased. Anything non-alphanumeric splits
/// tokens, so "it's" yields "it" and "s" and no token carries punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reduce a lowercase token to its noun base form ("votes" → "vote",
/// "studies" → "study"). Unknown shapes are returned unchanged.
pub fn lemmatize(word: &str) -> Cow<'_, str> {
    if let Some(base) = IRREGULAR.get(word) {
        return Cow::Borrowed(*base);
    }
    if word.chars().count() <= 3 || INVARIANT.contains(word) {
        return Cow::Borrowed(word);
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return Cow::Borrowed(word);
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return Cow::Owned(format!("{stem}y"));
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Cow::Borrowed(&word[..word.len() - 2]);
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        return Cow::Borrowed(stem);
    }
    Cow::Borrowed(word)
}

/// Full preprocessing pipeline used by the categorizer.
pub fn preprocess(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .map(|t| lemmatize(&t).into_owned())
        .filter(|t| !is_stop_word(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemmatize_handles_common_plurals() {
        assert_eq!(lemmatize("votes"), "vote");
        assert_eq!(lemmatize("studies"), "study");
        assert_eq!(lemmatize("matches"), "match");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("women"), "woman");
        assert_eq!(lemmatize("critics"), "critic");
        assert_eq!(lemmatize("clinics"), "clinic");
        assert_eq!(lemmatize("topics"), "topic");
    }

    #[test]
    fn lemmatize_keeps_invariant_forms() {
        assert_eq!(lemmatize("politics"), "politics");
        assert_eq!(lemmatize("olympics"), "olympics");
        assert_eq!(lemmatize("physics"), "physics");
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("congress"), "congress");
        assert_eq!(lemmatize("bus"), "bus");
        assert_eq!(lemmatize("law"), "law");
    }

    #[test]
    fn preprocess_drops_stop_words_and_punctuation() {
        let out = preprocess("Senate votes on new law. Congress passed the policy today.");
        assert_eq!(
            out,
            vec!["senate", "vote", "new", "law", "congress", "passed", "policy", "today"]
        );
    }

    #[test]
    fn contractions_split_and_filter() {
        let out = preprocess("It's the device");
        assert_eq!(out, vec!["device"]);
    }
}
