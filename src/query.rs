//! Query parsing, evaluation and ranking.
//!
//! A search is a pure pipeline over a read-only [`InvertedIndex`]:
//!
//! ```text
//! query string → QueryParser → Query → Searcher::evaluate → candidates → rank → Hits
//! ```
//!
//! [`InvertedIndex`]: crate::lexical::InvertedIndex

pub mod ast;
pub mod hit;
pub mod parser;
pub mod scorer;
pub mod searcher;

pub use ast::{Query, TermQuery};
pub use hit::{Hit, ReturnFields};
pub use parser::QueryParser;
pub use scorer::TfIdfScorer;
pub use searcher::{Candidates, Searcher};
