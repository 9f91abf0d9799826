//! Analyzer trait and the per-field analyzer variants.

pub mod keyword;
pub mod text;

use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{LumenError, Result};

use self::keyword::KeywordAnalyzer;
use self::text::TextAnalyzer;

/// Maps raw field text to a sequence of tokens.
///
/// Implementations are deterministic and hold no mutable state, so one
/// analyzer can be shared by every document in an index.
pub trait Analyzer: Send + Sync + Debug {
    /// Analyze text into tokens.
    fn analyze(&self, text: &str) -> Vec<Token>;

    /// The name of this analyzer.
    fn name(&self) -> &'static str;
}

/// The kind of analysis applied to a field.
///
/// This is the serializable side of [`FieldAnalyzer`]: mapping configs refer
/// to analyzers by kind and the mapping builds the concrete analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Full-text analysis with [`TextAnalyzer`].
    #[default]
    #[serde(alias = "standard", alias = "en")]
    Text,
    /// Verbatim single-token analysis with [`KeywordAnalyzer`].
    Keyword,
}

impl AnalyzerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::Text => "text",
            AnalyzerKind::Keyword => "keyword",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyzerKind {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "standard" | "en" => Ok(AnalyzerKind::Text),
            "keyword" => Ok(AnalyzerKind::Keyword),
            other => Err(LumenError::invalid_config(format!(
                "unknown analyzer '{other}'"
            ))),
        }
    }
}

/// The analyzer bound to one field.
#[derive(Debug, Clone)]
pub enum FieldAnalyzer {
    Text(TextAnalyzer),
    Keyword(KeywordAnalyzer),
}

impl FieldAnalyzer {
    pub fn kind(&self) -> AnalyzerKind {
        match self {
            FieldAnalyzer::Text(_) => AnalyzerKind::Text,
            FieldAnalyzer::Keyword(_) => AnalyzerKind::Keyword,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldAnalyzer::Text(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, FieldAnalyzer::Keyword(_))
    }
}

impl Default for FieldAnalyzer {
    fn default() -> Self {
        FieldAnalyzer::Text(TextAnalyzer::default())
    }
}

impl Analyzer for FieldAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        match self {
            FieldAnalyzer::Text(analyzer) => analyzer.analyze(text),
            FieldAnalyzer::Keyword(analyzer) => analyzer.analyze(text),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FieldAnalyzer::Text(analyzer) => analyzer.name(),
            FieldAnalyzer::Keyword(analyzer) => analyzer.name(),
        }
    }
}

impl From<TextAnalyzer> for FieldAnalyzer {
    fn from(analyzer: TextAnalyzer) -> Self {
        FieldAnalyzer::Text(analyzer)
    }
}

impl From<KeywordAnalyzer> for FieldAnalyzer {
    fn from(analyzer: KeywordAnalyzer) -> Self {
        FieldAnalyzer::Keyword(analyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_kind_from_str() {
        assert_eq!("text".parse::<AnalyzerKind>().unwrap(), AnalyzerKind::Text);
        assert_eq!("en".parse::<AnalyzerKind>().unwrap(), AnalyzerKind::Text);
        assert_eq!(
            "Keyword".parse::<AnalyzerKind>().unwrap(),
            AnalyzerKind::Keyword
        );
        assert!("ngram".parse::<AnalyzerKind>().is_err());
    }

    #[test]
    fn test_analyzer_kind_serde() {
        let kind: AnalyzerKind = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(kind, AnalyzerKind::Text);
        assert_eq!(
            serde_json::to_string(&AnalyzerKind::Keyword).unwrap(),
            "\"keyword\""
        );
    }

    #[test]
    fn test_field_analyzer_dispatch() {
        let text = FieldAnalyzer::from(TextAnalyzer::new());
        let keyword = FieldAnalyzer::from(KeywordAnalyzer::new());

        assert_eq!(text.kind(), AnalyzerKind::Text);
        assert_eq!(keyword.kind(), AnalyzerKind::Keyword);
        assert_eq!(text.analyze("Hello World").len(), 2);
        assert_eq!(keyword.analyze("Hello World").len(), 1);
    }
}
