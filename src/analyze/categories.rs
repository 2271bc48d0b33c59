// src/analyze/categories.rs
//! Static category table: label → lowercase keywords/phrases.
//!
//! Iteration order is significant: ties between equal top scores go to the
//! category listed first.

/// Label returned when the top category is a review category or the text reads negative.
pub const REVIEWS_OR_OPINION: &str = "reviews or opinion-based";

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    #[inline]
    pub fn matches(&self, term: &str) -> bool {
        self.keywords.iter().any(|k| *k == term)
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        label: "politics",
        keywords: &[
            "government", "election", "politics", "president", "congress", "senate", "party",
            "vote", "policy", "law",
        ],
    },
    Category {
        label: "technology",
        keywords: &[
            "technology", "software", "hardware", "internet", "computer", "ai", "gadget",
            "innovation", "device",
        ],
    },
    Category {
        label: "sports",
        keywords: &[
            "sports", "football", "basketball", "soccer", "tennis", "olympics", "athlete",
            "competition", "match", "wwe", "nfl", "shohei ohtani", "cycling", "championships",
        ],
    },
    Category {
        label: "entertainment",
        keywords: &[
            "movie", "music", "celebrity", "film", "tv", "hollywood", "show", "theater",
            "concert", "ananya panday", "arshad warsi", "aishwarya rai", "bhumi pednekar",
            "bollywood", "movie reviews",
        ],
    },
    Category {
        label: "business",
        keywords: &[
            "business", "economy", "finance", "stock", "market", "trade", "investment", "profit",
            "corporation",
        ],
    },
    Category {
        label: "health",
        keywords: &[
            "health", "medicine", "doctor", "patient", "treatment", "disease", "wellness",
            "nutrition", "exercise", "adhd", "relationships", "stress relief", "enterovirus",
        ],
    },
    Category {
        label: "science",
        keywords: &[
            "science", "research", "experiment", "study", "biology", "chemistry", "physics",
            "discovery", "theory",
        ],
    },
    Category {
        label: "travel",
        keywords: &[
            "travel", "tourism", "vacation", "trip", "destination", "flight", "hotel", "adventure",
        ],
    },
    Category {
        label: "lifestyle",
        keywords: &[
            "lifestyle", "fashion", "food", "fitness", "home", "beauty", "wellbeing", "hobby",
            "meditation",
        ],
    },
    Category {
        label: "reviews",
        keywords: &["review", "critics", "hate", "good"],
    },
    Category {
        label: "education",
        keywords: &[
            "education", "school", "college", "university", "learning", "student", "teacher",
            "curriculum", "class",
        ],
    },
    Category {
        label: "news / current events",
        keywords: &["hezbollah", "israel", "biden", "middle east conflict", "politics"],
    },
    Category {
        label: "opinion / features",
        keywords: &["opinions", "features", "commentary"],
    },
];
