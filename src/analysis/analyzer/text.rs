//! Language-aware full-text analyzer.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

/// Splits on non-alphanumeric boundaries, lowercases, and drops stop words.
///
/// Positions are renumbered after stop-word removal, so the surviving tokens
/// always carry positions `0..n`.
///
/// # Examples
///
/// ```
/// use lumen::analysis::{Analyzer, TextAnalyzer};
///
/// let analyzer = TextAnalyzer::with_stop_words(["the"]);
/// let tokens = analyzer.analyze("The Rust Book");
/// assert_eq!(tokens[0].text, "rust");
/// assert_eq!(tokens[0].position, 0);
/// ```
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    tokenizer: WordTokenizer,
    filters: Vec<Arc<dyn TokenFilter>>,
    stop_filter: StopFilter,
}

impl TextAnalyzer {
    /// Create a text analyzer with the English stop-word set.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::english())
    }

    /// Create a text analyzer with a custom stop-word set.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_filter(StopFilter::new(words))
    }

    /// Create a text analyzer that keeps every token.
    pub fn without_stop_words() -> Self {
        Self::with_stop_filter(StopFilter::default())
    }

    fn with_stop_filter(stop_filter: StopFilter) -> Self {
        TextAnalyzer {
            tokenizer: WordTokenizer::new(),
            filters: vec![
                Arc::new(LowercaseFilter::new()),
                Arc::new(stop_filter.clone()),
            ],
            stop_filter,
        }
    }

    /// The stop words this analyzer removes.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TextAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        for (position, token) in tokens.iter_mut().enumerate() {
            token.position = position;
        }
        tokens
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
