//! Query AST.

use std::fmt;

/// Matches documents containing one term.
///
/// With `field` unset the term is looked up in every full-text field. With a
/// field set it is looked up in that field only: normalized like a query word
/// for a full-text field, verbatim for a keyword field (an exact match on the
/// whole stored value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    pub field: Option<String>,
    pub text: String,
}

impl TermQuery {
    /// A term looked up in every full-text field.
    pub fn any_field(text: impl Into<String>) -> Self {
        TermQuery {
            field: None,
            text: text.into(),
        }
    }

    /// A term looked up in a single field.
    pub fn in_field(field: impl Into<String>, text: impl Into<String>) -> Self {
        TermQuery {
            field: Some(field.into()),
            text: text.into(),
        }
    }
}

/// A query node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Term(TermQuery),
    /// Matches documents matching at least one child; scores add up.
    Or(Vec<Query>),
}

impl Query {
    pub fn term(text: impl Into<String>) -> Self {
        Query::Term(TermQuery::any_field(text))
    }

    pub fn field_term(field: impl Into<String>, text: impl Into<String>) -> Self {
        Query::Term(TermQuery::in_field(field, text))
    }

    pub fn or(children: Vec<Query>) -> Self {
        Query::Or(children)
    }

    /// Number of term queries in this tree.
    pub fn term_count(&self) -> usize {
        match self {
            Query::Term(_) => 1,
            Query::Or(children) => children.iter().map(Query::term_count).sum(),
        }
    }
}

impl From<TermQuery> for Query {
    fn from(query: TermQuery) -> Self {
        Query::Term(query)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Term(TermQuery {
                field: Some(field),
                text,
            }) => write!(f, "{field}:{text}"),
            Query::Term(TermQuery { field: None, text }) => f.write_str(text),
            Query::Or(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" OR ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
