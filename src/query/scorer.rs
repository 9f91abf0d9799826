//! TF-IDF scoring.

/// Scores a term match as `tf * ln(1 + N / max(1, df))`.
///
/// `N` is the number of live documents and `df` the number of documents
/// containing the term in the field being scored.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfScorer {
    doc_count: usize,
}

impl TfIdfScorer {
    pub fn new(doc_count: usize) -> Self {
        TfIdfScorer { doc_count }
    }

    pub fn idf(&self, doc_freq: usize) -> f32 {
        (1.0 + self.doc_count as f32 / doc_freq.max(1) as f32).ln()
    }

    pub fn score(&self, term_freq: u32, doc_freq: usize) -> f32 {
        term_freq as f32 * self.idf(doc_freq)
    }
}
