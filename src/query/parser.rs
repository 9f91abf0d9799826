//! Query string parser.

use crate::analysis::normalize_term;
use crate::error::{LumenError, Result};
use crate::query::ast::{Query, TermQuery};

/// Parses a query string into an OR of its words.
///
/// The string is split on runs of whitespace; each word becomes a
/// [`TermQuery`] with no field and normalized (lowercased) text, and the words
/// are combined with [`Query::Or`]. A word therefore matches any full-text
/// field that contains it.
///
/// # Examples
///
/// ```
/// use lumen::query::{Query, QueryParser};
///
/// let query = QueryParser::new().parse("Hello  World").unwrap();
/// assert_eq!(query, Query::or(vec![Query::term("hello"), Query::term("world")]));
///
/// assert!(QueryParser::new().parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a query string.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Query`] if the string is empty after trimming.
    pub fn parse(&self, query: &str) -> Result<Query> {
        let children: Vec<Query> = query
            .split_whitespace()
            .map(|word| Query::Term(TermQuery::any_field(normalize_term(word))))
            .collect();

        if children.is_empty() {
            return Err(LumenError::query("query string is empty"));
        }
        Ok(Query::Or(children))
    }
}
