//! Query evaluation and ranking against an [`InvertedIndex`].

use ahash::AHashMap;
use log::{debug, trace};

use crate::analysis::{AnalyzerKind, normalize_term};
use crate::error::Result;
use crate::lexical::InvertedIndex;
use crate::query::ast::{Query, TermQuery};
use crate::query::hit::{Hit, ReturnFields};
use crate::query::parser::QueryParser;
use crate::query::scorer::TfIdfScorer;

/// Matching documents with their accumulated scores, keyed by document id.
pub type Candidates<'a> = AHashMap<&'a str, f32>;

/// Executes queries against a borrowed index.
///
/// Holding a shared borrow for the lifetime of the searcher means a search
/// always sees one consistent state of the index.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    index: &'a InvertedIndex,
    scorer: TfIdfScorer,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Searcher {
            index,
            scorer: TfIdfScorer::new(index.document_count()),
        }
    }

    /// Parse and run a query string, returning every match in rank order.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Query`](crate::LumenError::Query) if the query
    /// string is empty. A query that matches nothing is not an error.
    pub fn search(&self, query: &str, fields: &ReturnFields) -> Result<Vec<Hit>> {
        let parsed = QueryParser::new().parse(query)?;
        let hits = self.search_query(&parsed, fields);
        debug!("search '{query}' matched {} documents", hits.len());
        Ok(hits)
    }

    /// Run a parsed query, returning every match in rank order.
    pub fn search_query(&self, query: &Query, fields: &ReturnFields) -> Vec<Hit> {
        self.rank(self.evaluate(query))
            .into_iter()
            .map(|(id, score)| self.hit(id, score, fields))
            .collect()
    }

    /// Collect matching documents and their scores.
    ///
    /// A document matching several terms, or one term in several fields,
    /// receives the sum of the individual contributions. Documents matching
    /// nothing are absent.
    pub fn evaluate(&self, query: &Query) -> Candidates<'a> {
        let mut candidates = Candidates::new();
        self.collect(query, &mut candidates);
        candidates
    }

    fn collect(&self, query: &Query, candidates: &mut Candidates<'a>) {
        match query {
            Query::Term(term) => self.collect_term(term, candidates),
            Query::Or(children) => {
                for child in children {
                    self.collect(child, candidates);
                }
            }
        }
    }

    fn collect_term(&self, query: &TermQuery, candidates: &mut Candidates<'a>) {
        match &query.field {
            Some(field) => match self.index.mapping().kind_for(field) {
                AnalyzerKind::Text => {
                    self.collect_field_term(field, &normalize_term(&query.text), candidates)
                }
                AnalyzerKind::Keyword => self.collect_field_term(field, &query.text, candidates),
            },
            None => {
                let mapping = self.index.mapping();
                for field in self.index.field_names() {
                    if mapping.kind_for(field) == AnalyzerKind::Text {
                        self.collect_field_term(field, &query.text, candidates);
                    }
                }
            }
        }
    }

    fn collect_field_term(&self, field: &str, text: &str, candidates: &mut Candidates<'a>) {
        let postings = self.index.postings(field, text);
        if postings.is_empty() {
            return;
        }
        let doc_freq = postings.len();
        trace!("{field}:{text} df={doc_freq} idf={}", self.scorer.idf(doc_freq));
        for posting in postings {
            *candidates.entry(posting.doc_id.as_str()).or_insert(0.0) +=
                self.scorer.score(posting.term_freq, doc_freq);
        }
    }

    /// Order candidates by descending score, then ascending id.
    pub fn rank(&self, candidates: Candidates<'a>) -> Vec<(&'a str, f32)> {
        let mut ranked: Vec<(&'a str, f32)> = candidates.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Build a hit for a ranked candidate.
    pub fn hit(&self, id: &str, score: f32, fields: &ReturnFields) -> Hit {
        let fields = self
            .index
            .stored_fields(id)
            .map(|stored| fields.select(stored))
            .unwrap_or_default();
        Hit {
            id: id.to_string(),
            score,
            fields,
        }
    }

    pub fn index(&self) -> &'a InvertedIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::Document;
    use crate::mapping::FieldMapping;

    fn blog_index() -> InvertedIndex {
        let mapping = FieldMapping::builder()
            .add_text_field("Title")
            .add_text_field("Body")
            .add_keyword_field("Author")
            .build()
            .unwrap();
        let mut index = InvertedIndex::new(Arc::new(mapping));
        for (id, title, author, body) in [
            ("a", "Hello World", "Sangeet Kumar", "Hello world post"),
            ("b", "Hello World Again", "Mayan Sangeet", "Hello world post again"),
            (
                "c",
                "Hello World Again 2",
                "Mayan Sangeet",
                "Hello world post again one more time",
            ),
        ] {
            index
                .index_document(
                    Document::new(id)
                        .add_field("Title", title)
                        .add_field("Author", author)
                        .add_field("Body", body),
                )
                .unwrap();
        }
        index
    }

    fn ids(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_common_term_ties_break_by_id() {
        let index = blog_index();
        let hits = Searcher::new(&index)
            .search("hello", &ReturnFields::All)
            .unwrap();
        assert_eq!(ids(&hits), vec!["a", "b", "c"]);
        assert_eq!(hits[0].score, hits[2].score);
        // Title and Body both contain "hello".
        let expected = 2.0 * 2.0f32.ln();
        assert!((hits[0].score - expected).abs() < 1e-5);
    }

    #[test]
    fn test_or_sums_scores() {
        let index = blog_index();
        let hits = Searcher::new(&index)
            .search("again time", &ReturnFields::none())
            .unwrap();
        // c matches "again" in two fields plus the rare "time".
        assert_eq!(ids(&hits), vec!["c", "b"]);
        assert!(hits[0].score > hits[1].score);
        assert!(hits[1].fields.is_empty());
    }

    #[test]
    fn test_keyword_fields_excluded_from_free_text() {
        let index = blog_index();
        let searcher = Searcher::new(&index);
        let hits = searcher.search("Sangeet", &ReturnFields::All).unwrap();
        assert!(hits.is_empty());

        let exact = searcher.search_query(
            &Query::field_term("Author", "Mayan Sangeet"),
            &ReturnFields::names(["Author"]),
        );
        assert_eq!(ids(&exact), vec!["b", "c"]);
        assert_eq!(
            exact[0].fields.get("Author").map(String::as_str),
            Some("Mayan Sangeet")
        );
    }

    #[test]
    fn test_field_term_on_text_field_is_normalized() {
        let index = blog_index();
        let searcher = Searcher::new(&index);

        let hits = searcher.search_query(&Query::field_term("Title", "Hello"), &ReturnFields::All);
        assert_eq!(ids(&hits), vec!["a", "b", "c"]);
        // Title alone, so one field's contribution.
        assert!((hits[0].score - 2.0f32.ln()).abs() < 1e-5);

        let hits = searcher.search_query(&Query::field_term("Title", "AGAIN"), &ReturnFields::All);
        assert_eq!(ids(&hits), vec!["b", "c"]);

        // Keyword lookups stay case-sensitive.
        let hits = searcher.search_query(
            &Query::field_term("Author", "mayan sangeet"),
            &ReturnFields::All,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_match_and_empty_query() {
        let index = blog_index();
        let searcher = Searcher::new(&index);
        assert!(
            searcher
                .search("nonexistentterm", &ReturnFields::All)
                .unwrap()
                .is_empty()
        );
        assert!(searcher.search("  ", &ReturnFields::All).unwrap_err().is_query());
    }

    #[test]
    fn test_unmapped_fields_are_searchable() {
        let mut index = blog_index();
        index
            .index_document(Document::new("d").add_field("Tags", "rust search"))
            .unwrap();
        let hits = Searcher::new(&index)
            .search("rust", &ReturnFields::All)
            .unwrap();
        assert_eq!(ids(&hits), vec!["d"]);
    }

    #[test]
    fn test_rank_orders_by_score_then_id() {
        let index = blog_index();
        let searcher = Searcher::new(&index);
        let mut candidates = Candidates::new();
        candidates.insert("b", 1.0);
        candidates.insert("a", 1.0);
        candidates.insert("c", 2.0);
        let ranked = searcher.rank(candidates);
        let order: Vec<&str> = ranked.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
