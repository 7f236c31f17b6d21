use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref STOP_WORDS: HashSet<&'static str> =
        ["and", "the", "have", "for", "with"].into_iter().collect();
}

/// Tokens of this many characters or fewer are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// A free-text query normalised for lexical matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Whole query, lower-cased and trimmed; used for phrase containment.
    pub phrase: String,
    /// Surviving tokens in query order. Repeats are kept.
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn parse(query: &str) -> Self {
        let phrase = query.trim().to_lowercase();
        let tokens = tokenize(&phrase);
        Self { phrase, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}

/// Whitespace tokenisation of already lower-cased text with length and
/// stop-word filtering.
pub fn tokenize(lowered: &str) -> Vec<String> {
    lowered
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}
