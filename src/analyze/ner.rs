// src/analyze/ner.rs
//! Lightweight named-entity extraction over original-case text.
//!
//! An entity is a maximal run of capitalized words (e.g. "Shohei Ohtani",
//! "Middle East") or an all-caps acronym ("NFL", "ADHD"). Runs end at
//! punctuation that closes a clause. Leading function words ("The", "This")
//! are stripped, and a lone capitalized word opening a sentence is not an
//! entity unless it is an acronym or a known name. Headlines start the text,
//! so "Biden signs bill" still yields "Biden" when "biden" is known.
//!
//! Mentions are returned in order of appearance, duplicates included, so a
//! repeated name counts once per mention during scoring.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::analyze::categories::CATEGORIES;

static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "The", "This", "That", "These", "Those", "When", "Where", "What", "Which", "While",
        "With", "From", "Into", "Upon", "About", "After", "Before", "During", "Between",
        "Through", "Against", "Without", "Within", "Along", "Beyond", "Under", "Above", "Below",
        "Behind", "Here", "There", "Then", "Thus", "Also", "Even", "Just", "Only", "Some",
        "Many", "Much", "Most", "Other", "Such", "Each", "Every", "Both", "Either", "Neither",
        "All", "Any", "Few", "More", "Less", "But", "And", "For", "Nor", "Not", "Yet", "His",
        "Her", "Its", "Our", "Your", "Their", "Who", "How", "Why", "Can", "May", "Will",
        "Shall", "Should", "Would", "Could", "Must", "Has", "Have", "Had", "Was", "Were",
        "Been", "Being", "Are", "Now", "New", "Old", "Good", "Great", "Long", "First", "Last",
        "Next", "Like", "Over", "Still", "Back", "Well", "Down", "Off", "Come", "Made", "See",
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "A",
        "An", "In", "On", "At", "To", "Of", "By", "As", "If", "It", "He", "She", "We", "They",
        "I", "You", "Is", "Be", "Do", "Did", "Does", "So", "Or", "No",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    clean: &'a str,
    sentence_start: bool,
    closes_clause: bool,
}

fn is_acronym(w: &str) -> bool {
    w.chars().count() >= 2
        && w.chars().any(|c| c.is_alphabetic())
        && w.chars().all(|c| c.is_uppercase() || c.is_ascii_digit())
}

fn is_capitalized(w: &str) -> bool {
    w.chars().next().is_some_and(char::is_uppercase)
}

fn split_words(text: &str) -> Vec<Word<'_>> {
    let mut out = Vec::new();
    let mut sentence_start = true;
    for raw in text.split_whitespace() {
        let clean = raw.trim_matches(|c: char| !c.is_alphanumeric());
        let ends_sentence = raw.ends_with(['.', '!', '?']);
        let closes_clause = ends_sentence || raw.ends_with([',', ';', ':', ')', '"']);
        if !clean.is_empty() {
            out.push(Word {
                clean,
                sentence_start,
                closes_clause,
            });
        }
        sentence_start = ends_sentence;
    }
    out
}

fn flush(span: &mut Vec<Word<'_>>, out: &mut Vec<String>, is_known: &dyn Fn(&str) -> bool) {
    let start = span
        .iter()
        .position(|w| is_acronym(w.clean) || !COMMON_WORDS.contains(w.clean))
        .unwrap_or(span.len());
    let kept = &span[start..];

    let keep = match kept {
        [] => false,
        [only] => {
            is_acronym(only.clean)
                || !only.sentence_start
                || start > 0
                || is_known(&only.clean.to_lowercase())
        }
        _ => true,
    };
    if keep {
        let text = kept.iter().map(|w| w.clean).collect::<Vec<_>>().join(" ");
        out.push(text);
    }
    span.clear();
}

/// Extract entity mentions from `text`, preserving order and duplicates.
/// Sentence-initial single words count when they are category keywords.
pub fn extract_entities(text: &str) -> Vec<String> {
    extract_entities_with(text, &|w| CATEGORIES.iter().any(|c| c.matches(w)))
}

/// Like [`extract_entities`], with `is_known` deciding which lowercased
/// sentence-initial single words are still names.
pub fn extract_entities_with(text: &str, is_known: &dyn Fn(&str) -> bool) -> Vec<String> {
    let mut entities = Vec::new();
    let mut span: Vec<Word<'_>> = Vec::new();

    for w in split_words(text) {
        if is_capitalized(w.clean) || is_acronym(w.clean) {
            if w.sentence_start && !span.is_empty() {
                flush(&mut span, &mut entities, is_known);
            }
            span.push(w);
            if w.closes_clause {
                flush(&mut span, &mut entities, is_known);
            }
        } else if !span.is_empty() {
            flush(&mut span, &mut entities, is_known);
        }
    }
    if !span.is_empty() {
        flush(&mut span, &mut entities, is_known);
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_names_stay_together() {
        let out = extract_entities("Fans cheered as Shohei Ohtani hit another home run.");
        assert_eq!(out, vec!["Shohei Ohtani"]);
    }

    #[test]
    fn acronyms_are_entities_even_at_sentence_start() {
        let out = extract_entities("NFL owners meet. The WWE event sold out");
        assert_eq!(out, vec!["NFL", "WWE"]);
    }

    #[test]
    fn lone_sentence_initial_word_is_skipped() {
        let out = extract_entities("Lawmakers voted on new law Congress passed the policy today.");
        assert_eq!(out, vec!["Congress"]);
    }

    #[test]
    fn known_names_survive_at_sentence_start() {
        assert_eq!(extract_entities("Biden signs bill"), vec!["Biden"]);
        assert_eq!(extract_entities("Israel strikes back. Talks stall"), vec!["Israel"]);
        assert!(extract_entities_with("Biden signs bill", &|_| false).is_empty());
    }

    #[test]
    fn leading_function_words_are_stripped() {
        let out = extract_entities("Talks resumed in the region. The Middle East conflict widened");
        assert_eq!(out, vec!["Middle East"]);
    }

    #[test]
    fn punctuation_closes_a_span_and_duplicates_are_kept() {
        let out = extract_entities("Leaders from Israel, Biden and Israel met");
        assert_eq!(out, vec!["Israel", "Biden", "Israel"]);
    }
}
