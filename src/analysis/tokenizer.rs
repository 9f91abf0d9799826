//! Tokenizers split raw field text into a token stream.

use std::fmt::Debug;

use crate::analysis::token::Token;

/// Splits text into tokens.
pub trait Tokenizer: Send + Sync + Debug {
    /// Tokenize text, assigning sequential positions starting at 0.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// The name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// Tokenizer that splits on every non-alphanumeric character.
///
/// Alphanumeric follows [`char::is_alphanumeric`], so letters and digits of any
/// script form words while whitespace and punctuation separate them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Tokenizer that emits its whole input as one token, even when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        vec![Token::new(text, 0)]
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_word_tokenizer_splits_on_punctuation() {
        let tokens = WordTokenizer::new().tokenize("Hello, World! it's 2 o'clock");
        assert_eq!(
            texts(&tokens),
            vec!["Hello", "World", "it", "s", "2", "o", "clock"]
        );
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_word_tokenizer_unicode_letters() {
        let tokens = WordTokenizer::new().tokenize("café-crème über");
        assert_eq!(texts(&tokens), vec!["café", "crème", "über"]);
    }

    #[test]
    fn test_word_tokenizer_empty() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
        assert!(WordTokenizer::new().tokenize("  ,;  ").is_empty());
    }

    #[test]
    fn test_whole_tokenizer() {
        let tokens = WholeTokenizer::new().tokenize("Mayan Sangeet");
        assert_eq!(tokens, vec![Token::new("Mayan Sangeet", 0)]);

        let tokens = WholeTokenizer::new().tokenize("");
        assert_eq!(tokens, vec![Token::new("", 0)]);
    }
}
