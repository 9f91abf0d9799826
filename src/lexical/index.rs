//! In-memory inverted index.
//!
//! The index maps every (field, term) pair to a [`PostingList`] and keeps the
//! verbatim field values of each live document. It also keeps, per document,
//! the list of terms it contributed so that removing a document touches only
//! the postings lists that reference it.

use std::sync::Arc;

use ahash::AHashMap;
use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::data::{Document, DocumentId};
use crate::error::{LumenError, Result};
use crate::lexical::posting::{Posting, PostingList};
use crate::lexical::term::Term;
use crate::lexical::writer::{AnalyzedDocument, DocumentIndexer};
use crate::mapping::FieldMapping;

/// Verbatim field values of one document, in the order they were supplied.
pub type StoredFields = IndexMap<String, String>;

/// Size statistics for an [`InvertedIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of live documents.
    pub doc_count: usize,
    /// Number of distinct (field, term) pairs.
    pub term_count: usize,
    /// Number of postings across all terms.
    pub posting_count: usize,
}

/// Term → postings mapping plus per-document stored values.
///
/// Every posting refers to a document that has stored fields, and a document
/// appears at most once in any postings list.
#[derive(Debug)]
pub struct InvertedIndex {
    mapping: Arc<FieldMapping>,
    /// field → term text → postings
    fields: AHashMap<String, AHashMap<String, PostingList>>,
    stored: AHashMap<DocumentId, StoredFields>,
    doc_terms: AHashMap<DocumentId, Vec<Term>>,
    total_docs: usize,
}

impl InvertedIndex {
    /// Create an empty index bound to a field mapping.
    pub fn new(mapping: Arc<FieldMapping>) -> Self {
        InvertedIndex {
            mapping,
            fields: AHashMap::new(),
            stored: AHashMap::new(),
            doc_terms: AHashMap::new(),
            total_docs: 0,
        }
    }

    /// The field mapping every document in this index is analyzed with.
    pub fn mapping(&self) -> &Arc<FieldMapping> {
        &self.mapping
    }

    /// Analyze and index a document with this index's own mapping.
    ///
    /// A document whose id is already present replaces the earlier version.
    pub fn index_document(&mut self, doc: Document) -> Result<()> {
        DocumentIndexer::new(Arc::clone(&self.mapping)).index(doc, self)
    }

    /// Postings for a term; empty when the term is absent.
    pub fn postings_for(&self, term: &Term) -> &[Posting] {
        self.postings(&term.field, &term.text)
    }

    /// Postings for a term given as field and text.
    pub fn postings(&self, field: &str, text: &str) -> &[Posting] {
        self.fields
            .get(field)
            .and_then(|terms| terms.get(text))
            .map(PostingList::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct documents with at least one posting for the term.
    pub fn document_frequency(&self, term: &Term) -> usize {
        self.postings_for(term).len()
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.total_docs
    }

    pub fn is_empty(&self) -> bool {
        self.total_docs == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stored.contains_key(id)
    }

    /// Verbatim field values of a document.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::NotFound`] if no document has this id.
    pub fn stored_fields(&self, id: &str) -> Result<&StoredFields> {
        self.stored
            .get(id)
            .ok_or_else(|| LumenError::not_found(format!("document '{id}'")))
    }

    /// Names of fields that currently hold at least one term, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct (field, term) pairs.
    pub fn term_count(&self) -> usize {
        self.fields.values().map(|terms| terms.len()).sum()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.total_docs,
            term_count: self.term_count(),
            posting_count: self
                .fields
                .values()
                .flat_map(|terms| terms.values())
                .map(PostingList::doc_freq)
                .sum(),
        }
    }

    /// Remove a document and all of its postings.
    ///
    /// Returns true if the document existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.remove_document(id);
        if removed {
            debug!("deleted document '{id}'");
        }
        removed
    }

    /// Insert an analyzed document, first removing any earlier version of it.
    pub(crate) fn apply(&mut self, doc: AnalyzedDocument) {
        let AnalyzedDocument { id, stored, terms } = doc;

        let replaced = self.remove_document(&id);

        let mut doc_terms = Vec::with_capacity(terms.len());
        for (term, term_freq) in terms {
            trace!("posting {term} -> '{id}' (tf={term_freq})");
            self.fields
                .entry(term.field.clone())
                .or_default()
                .entry(term.text.clone())
                .or_default()
                .push(Posting::new(id.clone(), term_freq));
            doc_terms.push(term);
        }

        debug!(
            "{} document '{id}' ({} terms)",
            if replaced { "replaced" } else { "indexed" },
            doc_terms.len()
        );

        self.doc_terms.insert(id.clone(), doc_terms);
        self.stored.insert(id, stored);
        self.total_docs += 1;
    }

    fn remove_document(&mut self, id: &str) -> bool {
        if self.stored.remove(id).is_none() {
            return false;
        }

        for term in self.doc_terms.remove(id).unwrap_or_default() {
            let Some(terms) = self.fields.get_mut(&term.field) else {
                continue;
            };
            if let Some(list) = terms.get_mut(&term.text) {
                list.remove(id);
                if list.is_empty() {
                    terms.remove(&term.text);
                }
            }
            if terms.is_empty() {
                self.fields.remove(&term.field);
            }
        }

        self.total_docs = self.total_docs.saturating_sub(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_index() -> InvertedIndex {
        let mapping = FieldMapping::builder()
            .add_text_field("Title")
            .add_keyword_field("Author")
            .build()
            .unwrap();
        InvertedIndex::new(Arc::new(mapping))
    }

    fn assert_consistent(index: &InvertedIndex) {
        for terms in index.fields.values() {
            for list in terms.values() {
                assert!(!list.is_empty());
                let mut seen = ahash::AHashSet::new();
                for posting in list.iter() {
                    assert!(index.stored.contains_key(&posting.doc_id));
                    assert!(seen.insert(posting.doc_id.clone()));
                }
            }
        }
        assert_eq!(index.stored.len(), index.total_docs);
        assert_eq!(index.doc_terms.len(), index.total_docs);
    }

    #[test]
    fn test_empty_index() {
        let index = blog_index();
        assert!(index.is_empty());
        assert!(index.postings_for(&Term::new("Title", "hello")).is_empty());
        assert_eq!(index.document_frequency(&Term::new("Title", "hello")), 0);
        assert!(index.stored_fields("a").unwrap_err().is_not_found());
        assert_eq!(index.stats(), IndexStats::default());
    }

    #[test]
    fn test_index_and_lookup() {
        let mut index = blog_index();
        index
            .index_document(
                Document::new("a")
                    .add_field("Title", "Hello World, hello")
                    .add_field("Author", "Sangeet Kumar"),
            )
            .unwrap();

        let hello = index.postings_for(&Term::new("Title", "hello"));
        assert_eq!(hello, &[Posting::new("a", 2)]);
        assert_eq!(index.postings("Author", "Sangeet Kumar").len(), 1);
        assert!(index.postings("Author", "sangeet").is_empty());
        assert_eq!(index.field_names(), vec!["Author", "Title"]);
        assert_eq!(
            index.stored_fields("a").unwrap().get("Author").map(String::as_str),
            Some("Sangeet Kumar")
        );
        assert_eq!(
            index.stats(),
            IndexStats {
                doc_count: 1,
                term_count: 3,
                posting_count: 3,
            }
        );
        assert_consistent(&index);
    }

    #[test]
    fn test_reindex_replaces_postings() {
        let mut index = blog_index();
        index
            .index_document(Document::new("a").add_field("Title", "Hello World"))
            .unwrap();
        index
            .index_document(Document::new("a").add_field("Title", "Goodbye Moon"))
            .unwrap();

        assert_eq!(index.document_count(), 1);
        assert!(index.postings("Title", "hello").is_empty());
        assert!(index.postings("Title", "world").is_empty());
        assert_eq!(index.postings("Title", "goodbye").len(), 1);
        assert_eq!(
            index.stored_fields("a").unwrap().get("Title").map(String::as_str),
            Some("Goodbye Moon")
        );
        assert_consistent(&index);
    }

    #[test]
    fn test_delete() {
        let mut index = blog_index();
        index
            .index_document(Document::new("a").add_field("Title", "Hello"))
            .unwrap();
        index
            .index_document(Document::new("b").add_field("Title", "Hello again"))
            .unwrap();

        assert!(index.delete("a"));
        assert!(!index.delete("a"));
        assert_eq!(index.document_count(), 1);
        assert_eq!(index.postings("Title", "hello"), &[Posting::new("b", 1)]);
        assert!(!index.contains("a"));
        assert_consistent(&index);

        assert!(index.delete("b"));
        assert!(index.field_names().is_empty());
        assert_eq!(index.term_count(), 0);
        assert_consistent(&index);
    }

    #[test]
    fn test_document_without_terms_is_still_live() {
        let mut index = blog_index();
        index
            .index_document(Document::new("empty").add_field("Title", "the a is"))
            .unwrap();
        assert_eq!(index.document_count(), 1);
        assert_eq!(index.term_count(), 0);
        assert!(index.contains("empty"));
        assert!(index.delete("empty"));
        assert!(index.is_empty());
    }
}
