use indexmap::IndexMap;
use serde::Serialize;

use crate::facet::{FacetRequest, FacetResult};
use crate::query::{Hit, ReturnFields};

/// A search against an [`Engine`](super::Engine).
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Query string; its words are ORed across all full-text fields.
    pub query: String,

    /// Stored fields to attach to each hit.
    pub fields: ReturnFields,

    /// Maximum number of hits to return.
    pub size: usize,

    /// Number of ranked hits to skip (for pagination).
    pub from: usize,

    /// Facets to compute over every match, keyed by facet name.
    pub facets: IndexMap<String, FacetRequest>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            fields: ReturnFields::default(),
            size: 10,
            from: 0,
            facets: IndexMap::new(),
        }
    }

    pub fn builder(query: impl Into<String>) -> SearchRequestBuilder {
        SearchRequestBuilder {
            request: SearchRequest::new(query),
        }
    }
}

pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn fields(mut self, fields: ReturnFields) -> Self {
        self.request.fields = fields;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.request.size = size;
        self
    }

    pub fn from(mut self, from: usize) -> Self {
        self.request.from = from;
        self
    }

    /// Attach a facet. Adding a name twice replaces the earlier request.
    pub fn add_facet(mut self, name: impl Into<String>, request: FacetRequest) -> Self {
        self.request.facets.insert(name.into(), request);
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// The outcome of a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Number of matching documents before pagination.
    pub total: usize,
    /// Highest score among all matches, 0 when nothing matched.
    pub max_score: f32,
    /// The requested page of hits, in rank order.
    pub hits: Vec<Hit>,
    /// Facet results keyed by facet name.
    pub facets: IndexMap<String, FacetResult>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
