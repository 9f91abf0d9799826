//! Serializable mapping configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A field mapping as it appears in a JSON config file.
///
/// ```json
/// {
///   "fields": { "Title": "text", "Body": "en", "Author": "keyword" },
///   "default_analyzer": "text",
///   "stop_words": ["a", "the"]
/// }
/// ```
///
/// Analyzer names are kept as strings here and validated by
/// [`FieldMapping::from_config`](super::FieldMapping::from_config), which
/// reports the offending field on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Analyzer name for each declared field.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Analyzer for undeclared fields. Defaults to `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_analyzer: Option<String>,

    /// Stop words for text fields. `None` selects the English set; an empty
    /// list disables stop-word removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<Vec<String>>,
}

impl MappingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, analyzer: impl Into<String>) -> Self {
        self.fields.insert(name.into(), analyzer.into());
        self
    }
}
