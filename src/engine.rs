//! Thread-safe facade over one index.

pub mod search;

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::{RwLock, RwLockReadGuard};
use serde::Serialize;

use crate::data::{Document, DocumentId};
use crate::error::Result;
use crate::facet::{self, FacetCollector, FacetResult};
use crate::lexical::{DocumentIndexer, IndexStats, InvertedIndex, StoredFields};
use crate::mapping::{FieldMapping, MappingConfig};
use crate::query::{Hit, QueryParser, ReturnFields, Searcher};

use self::search::{SearchRequest, SearchResult};

/// Outcome of [`Engine::index_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Number of documents written.
    pub indexed: usize,
    /// Rejected documents with the reason.
    pub failed: Vec<(DocumentId, String)>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// An index plus its field mapping, safe to share between threads.
///
/// Writes (`index`, `index_batch`, `delete`) take an exclusive lock; reads
/// (`search`, `facet`, `stored_fields`, ...) share a read lock held for the
/// whole call, so a reader never observes a partially applied write.
/// Documents are analyzed before the write lock is taken.
///
/// # Examples
///
/// ```
/// use lumen::{Document, Engine, FieldMapping, SearchRequest};
///
/// let mapping = FieldMapping::builder()
///     .add_text_field("Title")
///     .add_keyword_field("Author")
///     .build()
///     .unwrap();
/// let engine = Engine::new(mapping);
///
/// engine.index(Document::new("a").add_field("Title", "Hello World")).unwrap();
///
/// let result = engine.search(&SearchRequest::new("hello")).unwrap();
/// assert_eq!(result.total, 1);
/// assert_eq!(result.hits[0].id, "a");
/// ```
#[derive(Debug)]
pub struct Engine {
    indexer: DocumentIndexer,
    index: RwLock<InvertedIndex>,
}

impl Engine {
    pub fn new(mapping: FieldMapping) -> Self {
        let mapping = Arc::new(mapping);
        Engine {
            indexer: DocumentIndexer::new(Arc::clone(&mapping)),
            index: RwLock::new(InvertedIndex::new(mapping)),
        }
    }

    pub fn from_config(config: &MappingConfig) -> Result<Self> {
        Ok(Self::new(FieldMapping::from_config(config)?))
    }

    pub fn mapping(&self) -> &Arc<FieldMapping> {
        self.indexer.mapping()
    }

    /// Index a document, replacing any earlier document with the same id.
    pub fn index(&self, doc: Document) -> Result<()> {
        let analyzed = self.indexer.analyze(doc)?;
        self.index.write().apply(analyzed);
        Ok(())
    }

    /// Index several documents.
    ///
    /// Invalid documents are skipped and reported; they do not affect the
    /// documents before or after them.
    pub fn index_batch<I>(&self, docs: I) -> BatchOutcome
    where
        I: IntoIterator<Item = Document>,
    {
        let mut outcome = BatchOutcome::default();
        let mut analyzed = Vec::new();
        for doc in docs {
            let id = doc.id.clone();
            match self.indexer.analyze(doc) {
                Ok(doc) => analyzed.push(doc),
                Err(e) => {
                    warn!("rejected document '{id}': {e}");
                    outcome.failed.push((id, e.to_string()));
                }
            }
        }

        let mut index = self.index.write();
        for doc in analyzed {
            index.apply(doc);
            outcome.indexed += 1;
        }
        debug!(
            "batch indexed {} documents, rejected {}",
            outcome.indexed,
            outcome.failed.len()
        );
        outcome
    }

    /// Delete a document. Returns true if it existed.
    pub fn delete(&self, id: &str) -> bool {
        self.index.write().delete(id)
    }

    /// Run a search request.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Query`](crate::LumenError::Query) if the query
    /// string is empty.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let query = QueryParser::new().parse(&request.query)?;

        let index = self.index.read();
        let searcher = Searcher::new(&index);
        let ranked = searcher.rank(searcher.evaluate(&query));

        let facets = request
            .facets
            .iter()
            .map(|(name, facet_request)| {
                let mut collector = FacetCollector::new(&index, facet_request.clone());
                for (id, _) in &ranked {
                    collector.collect(id);
                }
                (name.clone(), collector.finish())
            })
            .collect();

        let hits: Vec<Hit> = ranked
            .iter()
            .skip(request.from)
            .take(request.size)
            .map(|(id, score)| searcher.hit(id, *score, &request.fields))
            .collect();

        debug!(
            "search '{}' matched {} documents, returning {}",
            request.query,
            ranked.len(),
            hits.len()
        );

        Ok(SearchResult {
            total: ranked.len(),
            max_score: ranked.first().map(|(_, score)| *score).unwrap_or(0.0),
            hits,
            facets,
        })
    }

    /// Every match of a query string in rank order, without pagination.
    pub fn search_all(&self, query: &str, fields: &ReturnFields) -> Result<Vec<Hit>> {
        let index = self.index.read();
        Searcher::new(&index).search(query, fields)
    }

    /// Count the values of `field` among `hits`.
    pub fn facet(&self, hits: &[Hit], field: &str, size: usize) -> FacetResult {
        let index = self.index.read();
        facet::facet(&index, hits, field, size)
    }

    /// A copy of a document's stored fields.
    pub fn stored_fields(&self, id: &str) -> Result<StoredFields> {
        self.index.read().stored_fields(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.read().contains(id)
    }

    pub fn document_count(&self) -> usize {
        self.index.read().document_count()
    }

    pub fn stats(&self) -> IndexStats {
        self.index.read().stats()
    }

    /// Hold a read lock for several operations against one consistent state.
    pub fn reader(&self) -> RwLockReadGuard<'_, InvertedIndex> {
        self.index.read()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::facet::FacetRequest;

    fn engine() -> Engine {
        Engine::new(
            FieldMapping::builder()
                .add_text_field("Title")
                .add_keyword_field("Author")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_pagination_and_total() {
        let engine = engine();
        for i in 0..5 {
            engine
                .index(Document::new(format!("doc{i}")).add_field("Title", "hello"))
                .unwrap();
        }

        let request = SearchRequest::builder("hello").size(2).from(1).build();
        let result = engine.search(&request).unwrap();
        assert_eq!(result.total, 5);
        let ids: Vec<&str> = result.hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["doc1", "doc2"]);
        assert!(result.max_score > 0.0);
    }

    #[test]
    fn test_facets_cover_all_matches_not_just_page() {
        let engine = engine();
        for (id, author) in [("a", "X"), ("b", "Y"), ("c", "Y")] {
            engine
                .index(
                    Document::new(id)
                        .add_field("Title", "hello")
                        .add_field("Author", author),
                )
                .unwrap();
        }

        let request = SearchRequest::builder("hello")
            .size(1)
            .add_facet("authors", FacetRequest::new("Author", 10))
            .build();
        let result = engine.search(&request).unwrap();
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.facets["authors"].total, 3);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let engine = engine();
        let outcome = engine.index_batch(vec![
            Document::new("a").add_field("Title", "one"),
            Document::new("").add_field("Title", "bad"),
            Document::new("b").add_field("Title", "two"),
        ]);
        assert_eq!(outcome.indexed, 2);
        assert_eq!(outcome.failed.len(), 1);
        assert!(!outcome.is_success());
        assert_eq!(engine.document_count(), 2);
    }

    #[test]
    fn test_empty_query_on_empty_engine() {
        let engine = engine();
        let err = engine.search(&SearchRequest::new(" ")).unwrap_err();
        assert!(err.is_query());
        assert!(engine.search(&SearchRequest::new("x")).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_readers_see_whole_documents() {
        let engine = engine();
        engine
            .index(Document::new("doc").add_field("Title", "alpha beta"))
            .unwrap();

        thread::scope(|s| {
            s.spawn(|| {
                for i in 0..200 {
                    let title = if i % 2 == 0 { "alpha beta" } else { "gamma delta" };
                    engine
                        .index(Document::new("doc").add_field("Title", title))
                        .unwrap();
                }
            });
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let hits = engine.search_all("alpha gamma", &ReturnFields::All).unwrap();
                        assert_eq!(hits.len(), 1);
                        let title = hits[0].fields["Title"].as_str();
                        assert!(title == "alpha beta" || title == "gamma delta");
                        assert_eq!(engine.document_count(), 1);
                    }
                });
            }
        });
    }
}
