//! Document indexer.
//!
//! Indexing runs in two steps. [`DocumentIndexer::analyze`] validates a
//! document and turns it into an [`AnalyzedDocument`] without touching the
//! index, so it can run outside any lock. Applying the analyzed document then
//! removes every posting of an earlier version with the same id before
//! inserting the new ones (last write wins).

use std::sync::Arc;

use indexmap::IndexMap;

use crate::analysis::Analyzer;
use crate::data::{Document, DocumentId};
use crate::error::{LumenError, Result};
use crate::lexical::index::{InvertedIndex, StoredFields};
use crate::lexical::term::Term;
use crate::mapping::FieldMapping;

/// A document after analysis, ready to be applied to an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedDocument {
    pub id: DocumentId,
    /// Raw field values, stored verbatim.
    pub stored: StoredFields,
    /// Distinct terms with their in-document frequency, in first-seen order.
    pub terms: Vec<(Term, u32)>,
}

/// Analyzes documents with a field mapping and writes them into an index.
#[derive(Debug, Clone)]
pub struct DocumentIndexer {
    mapping: Arc<FieldMapping>,
}

impl DocumentIndexer {
    pub fn new(mapping: Arc<FieldMapping>) -> Self {
        DocumentIndexer { mapping }
    }

    pub fn mapping(&self) -> &Arc<FieldMapping> {
        &self.mapping
    }

    /// Validate and analyze a document.
    ///
    /// Fields absent from the mapping use the mapping's default analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Index`] if the document id or a field name is empty.
    pub fn analyze(&self, doc: Document) -> Result<AnalyzedDocument> {
        if doc.id.trim().is_empty() {
            return Err(LumenError::index("document id must not be empty"));
        }

        let mut freqs: IndexMap<Term, u32> = IndexMap::new();
        for (name, value) in &doc.fields {
            if name.trim().is_empty() {
                return Err(LumenError::index(format!(
                    "document '{}' has a field with an empty name",
                    doc.id
                )));
            }
            for token in self.mapping.analyzer_for(name).analyze(value) {
                *freqs.entry(Term::new(name.as_str(), token.text)).or_insert(0) += 1;
            }
        }

        Ok(AnalyzedDocument {
            id: doc.id,
            stored: doc.fields,
            terms: freqs.into_iter().collect(),
        })
    }

    /// Analyze a document and write it into `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Index`] if the document is invalid or if `index`
    /// was built with a different field mapping. The index is left unchanged
    /// on error.
    pub fn index(&self, doc: Document, index: &mut InvertedIndex) -> Result<()> {
        if !Arc::ptr_eq(&self.mapping, index.mapping()) {
            return Err(LumenError::index(
                "indexer and index must share the same Arc<FieldMapping>; \
                 build the index from the indexer's mapping() handle",
            ));
        }
        let analyzed = self.analyze(doc)?;
        index.apply(analyzed);
        Ok(())
    }
}
