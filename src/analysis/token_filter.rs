//! Token filters transform or drop tokens from a token stream.

use std::fmt::Debug;
use std::sync::Arc;

use ahash::AHashSet;
use unicode_normalization::UnicodeNormalization;

use crate::analysis::normalize_term;
use crate::analysis::token::Token;

/// Transforms a token stream.
pub trait TokenFilter: Send + Sync + Debug {
    /// Filter or transform tokens.
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;

    /// The name of this filter.
    fn name(&self) -> &'static str;
}

/// NFKC-normalizes and lowercases every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.text = token.text.nfkc().collect::<String>().to_lowercase();
                token
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// English stop words applied by [`StopFilter::english`].
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Removes tokens whose text is in a stop-word set.
///
/// Matching is exact, so the filter belongs after [`LowercaseFilter`].
#[derive(Debug, Clone, Default)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a filter with the given stop words. An empty set removes nothing.
    ///
    /// Words are normalized like [`LowercaseFilter`] output, so `"The"` and
    /// `"the"` name the same stop word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(
                words
                    .into_iter()
                    .map(|word| {
                        let word: String = word.into();
                        normalize_term(&word)
                    })
                    .collect(),
            ),
        }
    }

    /// Create a filter with [`ENGLISH_STOP_WORDS`].
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// The stop words, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.stop_words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        if self.stop_words.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(&token.text))
            .collect()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
