//! # Lumen
//!
//! A small embeddable in-memory full-text search library.
//!
//! ## Features
//!
//! - Per-field analysis: tokenized full text or verbatim keywords
//! - Inverted index with last-write-wins replacement and deletion
//! - OR queries across full-text fields with tf-idf ranking
//! - Term facets over stored field values
//! - Single writer, many concurrent readers

pub mod analysis;
mod data;
mod engine;
mod error;
pub mod facet;
pub mod lexical;
pub mod mapping;
pub mod query;

pub use analysis::{Analyzer, AnalyzerKind, FieldAnalyzer};
pub use data::{Document, DocumentId};
pub use engine::search::{SearchRequest, SearchRequestBuilder, SearchResult};
pub use engine::{BatchOutcome, Engine};
pub use error::{LumenError, Result};
pub use facet::{FacetRequest, FacetResult, TermFacet, facet};
pub use lexical::{DocumentIndexer, IndexStats, InvertedIndex, StoredFields};
pub use mapping::config::MappingConfig;
pub use mapping::{FieldMapping, FieldMappingBuilder, build_mapping};
pub use query::{Hit, Query, QueryParser, ReturnFields, Searcher, TermQuery};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
