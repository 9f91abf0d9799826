//! Lexical indexing: terms, postings, the inverted index and the indexer.
//!
//! # Module Structure
//!
//! - `term`: the (field, token) unit that is indexed and queried
//! - `posting`: per-document occurrence records
//! - `index`: the in-memory inverted index and its stored field values
//! - `writer`: analysis of documents and the delete-before-insert protocol

pub mod index;
pub mod posting;
pub mod term;
pub mod writer;

pub use index::{IndexStats, InvertedIndex, StoredFields};
pub use posting::{Posting, PostingList};
pub use term::Term;
pub use writer::{AnalyzedDocument, DocumentIndexer};
