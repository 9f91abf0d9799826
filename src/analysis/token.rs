//! Token representation.

use serde::{Deserialize, Serialize};

/// A normalized unit of text produced by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The token text.
    pub text: String,
    /// Zero-based position within the field's token stream.
    ///
    /// Scoring does not read it.
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}
