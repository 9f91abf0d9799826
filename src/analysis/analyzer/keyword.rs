//! Keyword analyzer that treats the whole field value as one token.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WholeTokenizer};

/// Emits the input unchanged as a single token at position 0.
///
/// No case folding and no splitting. An empty input yields one empty token
/// rather than nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAnalyzer {
    tokenizer: WholeTokenizer,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        KeywordAnalyzer {
            tokenizer: WholeTokenizer::new(),
        }
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
