//! Text analysis for Lumen.
//!
//! Analysis turns the raw text of a field into the normalized tokens that are
//! stored in the inverted index:
//!
//! ```text
//! Text → Tokenizer → Token Stream → Token Filters → Analyzed Tokens
//! ```
//!
//! Every field is bound to exactly one [`FieldAnalyzer`] variant:
//!
//! - [`TextAnalyzer`]: splits on non-alphanumeric boundaries, lowercases and
//!   drops stop words.
//! - [`KeywordAnalyzer`]: emits the whole input verbatim as a single token.
//!
//! # Examples
//!
//! ```
//! use lumen::analysis::{Analyzer, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new();
//! let tokens: Vec<String> = analyzer
//!     .analyze("Hello, World!")
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::keyword::KeywordAnalyzer;
pub use analyzer::text::TextAnalyzer;
pub use analyzer::{Analyzer, AnalyzerKind, FieldAnalyzer};
pub use token::Token;
pub use token_filter::{LowercaseFilter, StopFilter, TokenFilter};
pub use tokenizer::{Tokenizer, WholeTokenizer, WordTokenizer};

use unicode_normalization::UnicodeNormalization;

/// Normalize a single term the way [`LowercaseFilter`] normalizes tokens.
///
/// Used by the query parser so that query terms and indexed terms meet in the
/// same form.
pub fn normalize_term(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
