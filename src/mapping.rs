//! Field mapping: which analyzer applies to which document field.
//!
//! A [`FieldMapping`] is declared once, before any document is indexed, and is
//! shared by every document in one index. Fields that are not declared resolve
//! to the mapping's default analyzer, which is a [`TextAnalyzer`] unless
//! configured otherwise.
//!
//! # Examples
//!
//! ```
//! use lumen::analysis::AnalyzerKind;
//! use lumen::mapping::FieldMapping;
//!
//! let mapping = FieldMapping::builder()
//!     .add_text_field("Title")
//!     .add_keyword_field("Author")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(mapping.kind_for("Author"), AnalyzerKind::Keyword);
//! assert_eq!(mapping.kind_for("Body"), AnalyzerKind::Text);
//! ```

pub mod config;

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::analysis::analyzer::{AnalyzerKind, FieldAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::analysis::{KeywordAnalyzer, TextAnalyzer};
use crate::error::{LumenError, Result};

pub use self::config::MappingConfig;

/// Per-field analyzer bindings for one index.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    fields: AHashMap<String, FieldAnalyzer>,
    default_analyzer: FieldAnalyzer,
    stop_filter: StopFilter,
}

impl FieldMapping {
    pub fn builder() -> FieldMappingBuilder {
        FieldMappingBuilder::default()
    }

    /// The analyzer for a field, falling back to the default analyzer.
    pub fn analyzer_for(&self, field: &str) -> &FieldAnalyzer {
        self.fields.get(field).unwrap_or(&self.default_analyzer)
    }

    pub fn kind_for(&self, field: &str) -> AnalyzerKind {
        self.analyzer_for(field).kind()
    }

    /// Returns true if the field was declared explicitly.
    pub fn is_mapped(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn default_kind(&self) -> AnalyzerKind {
        self.default_analyzer.kind()
    }

    /// Declared field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Declared fields using the text analyzer, sorted.
    pub fn text_fields(&self) -> Vec<&str> {
        self.fields_of_kind(AnalyzerKind::Text)
    }

    /// Declared fields using the keyword analyzer, sorted.
    pub fn keyword_fields(&self) -> Vec<&str> {
        self.fields_of_kind(AnalyzerKind::Keyword)
    }

    fn fields_of_kind(&self, kind: AnalyzerKind) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .fields
            .iter()
            .filter(|(_, analyzer)| analyzer.kind() == kind)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a mapping from a deserialized config.
    pub fn from_config(config: &MappingConfig) -> Result<Self> {
        let mut builder = FieldMapping::builder();
        if let Some(words) = &config.stop_words {
            builder = builder.stop_words(words.iter().cloned());
        }
        if let Some(name) = &config.default_analyzer {
            builder = builder.default_analyzer(name.parse()?);
        }
        for (field, analyzer) in &config.fields {
            let kind = analyzer.parse::<AnalyzerKind>().map_err(|_| {
                LumenError::invalid_config(format!(
                    "unknown analyzer '{analyzer}' for field '{field}'"
                ))
            })?;
            builder = builder.add_field(field.clone(), kind);
        }
        builder.build()
    }

    /// Parse a JSON mapping config and build the mapping.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MappingConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    /// Describe this mapping as a config that rebuilds it.
    pub fn to_config(&self) -> MappingConfig {
        let fields: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|(name, analyzer)| (name.clone(), analyzer.kind().to_string()))
            .collect();
        MappingConfig {
            fields,
            default_analyzer: Some(self.default_kind().to_string()),
            stop_words: Some(self.stop_filter.words()),
        }
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        FieldMapping {
            fields: AHashMap::new(),
            default_analyzer: FieldAnalyzer::default(),
            stop_filter: StopFilter::english(),
        }
    }
}

/// Builds a [`FieldMapping`] from analyzer names.
///
/// Each pair is a field name and an analyzer name (`"text"`, `"keyword"`,
/// or the aliases `"standard"` and `"en"`).
pub fn build_mapping<I, F, A>(field_analyzers: I) -> Result<FieldMapping>
where
    I: IntoIterator<Item = (F, A)>,
    F: Into<String>,
    A: AsRef<str>,
{
    let mut builder = FieldMapping::builder();
    for (field, analyzer) in field_analyzers {
        let field = field.into();
        let kind = analyzer.as_ref().parse::<AnalyzerKind>().map_err(|_| {
            LumenError::invalid_config(format!(
                "unknown analyzer '{}' for field '{field}'",
                analyzer.as_ref()
            ))
        })?;
        builder = builder.add_field(field, kind);
    }
    builder.build()
}

#[derive(Debug, Default)]
pub struct FieldMappingBuilder {
    fields: Vec<(String, AnalyzerKind)>,
    default_analyzer: AnalyzerKind,
    stop_words: Option<Vec<String>>,
}

impl FieldMappingBuilder {
    pub fn add_field(mut self, name: impl Into<String>, kind: AnalyzerKind) -> Self {
        self.fields.push((name.into(), kind));
        self
    }

    pub fn add_text_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, AnalyzerKind::Text)
    }

    pub fn add_keyword_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, AnalyzerKind::Keyword)
    }

    /// Analyzer for fields that are not declared.
    pub fn default_analyzer(mut self, kind: AnalyzerKind) -> Self {
        self.default_analyzer = kind;
        self
    }

    /// Replace the English stop words used by every text field.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Validate field names and build the mapping.
    ///
    /// A field declared twice keeps its last analyzer.
    pub fn build(self) -> Result<FieldMapping> {
        let stop_filter = match self.stop_words {
            Some(words) => StopFilter::new(words),
            None => StopFilter::english(),
        };
        let text = TextAnalyzer::with_stop_words(stop_filter.words());
        let make = |kind: AnalyzerKind| -> FieldAnalyzer {
            match kind {
                AnalyzerKind::Text => FieldAnalyzer::Text(text.clone()),
                AnalyzerKind::Keyword => FieldAnalyzer::Keyword(KeywordAnalyzer::new()),
            }
        };

        let mut fields = AHashMap::with_capacity(self.fields.len());
        for (name, kind) in self.fields {
            if name.trim().is_empty() {
                return Err(LumenError::index("field mapping refers to an empty field name"));
            }
            fields.insert(name, make(kind));
        }

        Ok(FieldMapping {
            fields,
            default_analyzer: make(self.default_analyzer),
            stop_filter,
        })
    }
}
