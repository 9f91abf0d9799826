//! Postings: which documents contain a term, and how often.

use serde::{Deserialize, Serialize};

use crate::data::DocumentId;

/// One document's occurrence record for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocumentId,
    /// Number of times the term occurs in this document's field.
    pub term_freq: u32,
}

impl Posting {
    pub fn new(doc_id: impl Into<DocumentId>, term_freq: u32) -> Self {
        Posting {
            doc_id: doc_id.into(),
            term_freq,
        }
    }
}

/// Postings for one term in insertion order.
///
/// Holds at most one posting per document; the index guarantees this by
/// removing a document's postings before re-inserting them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, posting: Posting) {
        self.postings.push(posting);
    }

    /// Remove the posting for `doc_id`. Returns true if one was removed.
    pub fn remove(&mut self, doc_id: &str) -> bool {
        let before = self.postings.len();
        self.postings.retain(|p| p.doc_id != doc_id);
        self.postings.len() != before
    }

    /// Number of distinct documents in this list.
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }

    /// Sum of term frequencies across all documents.
    pub fn total_term_freq(&self) -> u64 {
        self.postings.iter().map(|p| u64::from(p.term_freq)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn as_slice(&self) -> &[Posting] {
        &self.postings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove() {
        let mut list = PostingList::new();
        list.push(Posting::new("a", 2));
        list.push(Posting::new("b", 1));
        list.push(Posting::new("c", 4));

        assert_eq!(list.doc_freq(), 3);
        assert_eq!(list.total_term_freq(), 7);

        assert!(list.remove("b"));
        assert!(!list.remove("b"));

        let ids: Vec<&str> = list.iter().map(|p| p.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_list() {
        let mut list = PostingList::new();
        assert!(list.is_empty());
        assert!(!list.remove("a"));
        assert!(list.as_slice().is_empty());
    }
}
