//! Term facets over a result set.
//!
//! A facet counts the distinct verbatim values of one field among the matched
//! documents. Values are read from the stored fields, not from analyzed
//! tokens, so facets are normally requested on keyword fields.

use ahash::AHashMap;
use serde::Serialize;

use crate::lexical::InvertedIndex;
use crate::query::Hit;

/// One facet value and the number of matched documents holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermFacet {
    pub term: String,
    pub count: u64,
}

/// Facet counts for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetResult {
    pub field: String,
    /// Sum of all value counts, including values truncated from `terms`.
    pub total: u64,
    /// Matched documents without a value for the field. Never part of `total`.
    pub missing: u64,
    /// Sum of the counts of values truncated from `terms`.
    pub other: u64,
    /// Values by descending count, then ascending value.
    pub terms: Vec<TermFacet>,
}

/// A request for a facet, as attached to a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRequest {
    pub field: String,
    /// Maximum number of values reported.
    pub size: usize,
}

impl FacetRequest {
    pub fn new(field: impl Into<String>, size: usize) -> Self {
        FacetRequest {
            field: field.into(),
            size,
        }
    }
}

/// Accumulates facet counts one document at a time.
#[derive(Debug)]
pub struct FacetCollector<'a> {
    index: &'a InvertedIndex,
    request: FacetRequest,
    counts: AHashMap<&'a str, u64>,
    missing: u64,
}

impl<'a> FacetCollector<'a> {
    pub fn new(index: &'a InvertedIndex, request: FacetRequest) -> Self {
        FacetCollector {
            index,
            request,
            counts: AHashMap::new(),
            missing: 0,
        }
    }

    /// Count one matched document. Documents that are no longer in the index
    /// count as missing.
    pub fn collect(&mut self, doc_id: &str) {
        let value = self
            .index
            .stored_fields(doc_id)
            .ok()
            .and_then(|stored| stored.get(&self.request.field));
        match value {
            Some(value) => *self.counts.entry(value.as_str()).or_insert(0) += 1,
            None => self.missing += 1,
        }
    }

    pub fn finish(self) -> FacetResult {
        let total: u64 = self.counts.values().sum();

        let mut terms: Vec<TermFacet> = self
            .counts
            .into_iter()
            .map(|(term, count)| TermFacet {
                term: term.to_string(),
                count,
            })
            .collect();
        terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        terms.truncate(self.request.size);

        let returned: u64 = terms.iter().map(|t| t.count).sum();

        FacetResult {
            field: self.request.field,
            total,
            missing: self.missing,
            other: total - returned,
            terms,
        }
    }
}

/// Count the values of `field` among `hits`, keeping the top `size` values.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lumen::{Document, FieldMapping, InvertedIndex, ReturnFields, Searcher, facet};
///
/// let mapping = FieldMapping::builder()
///     .add_text_field("Title")
///     .add_keyword_field("Author")
///     .build()
///     .unwrap();
/// let mut index = InvertedIndex::new(Arc::new(mapping));
/// index.index_document(Document::new("a").add_field("Title", "Hello").add_field("Author", "Ann")).unwrap();
/// index.index_document(Document::new("b").add_field("Title", "Hello")).unwrap();
///
/// let hits = Searcher::new(&index).search("hello", &ReturnFields::All).unwrap();
/// let result = facet(&index, &hits, "Author", 10);
/// assert_eq!(result.total, 1);
/// assert_eq!(result.missing, 1);
/// ```
pub fn facet(index: &InvertedIndex, hits: &[Hit], field: &str, size: usize) -> FacetResult {
    let mut collector = FacetCollector::new(index, FacetRequest::new(field, size));
    for hit in hits {
        collector.collect(&hit.id);
    }
    collector.finish()
}
