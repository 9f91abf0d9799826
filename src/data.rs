//! Documents accepted by the indexer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LumenError, Result};

/// Document identifier, supplied by the caller and unique within an index.
pub type DocumentId = String;

/// A document: an identifier plus named string fields in insertion order.
///
/// # Examples
///
/// ```
/// use lumen::Document;
///
/// let doc = Document::new("a")
///     .add_field("Title", "Hello World")
///     .add_field("Author", "Sangeet Kumar");
///
/// assert_eq!(doc.get_field("Author"), Some("Sangeet Kumar"));
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Document {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field. Adding the same name twice replaces the earlier value in place.
    pub fn add_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a document from a flat JSON object.
    ///
    /// The identifier is read from `"id"` (or `"_id"`) and must be a string.
    /// Strings are stored as-is; numbers and booleans are stored as their JSON
    /// text; nulls are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Index`] if the value is not an object, the
    /// identifier is missing, or a field holds an array or nested object.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let obj = json
            .as_object()
            .ok_or_else(|| LumenError::index("expected a JSON object"))?;

        let id = obj
            .get("id")
            .or_else(|| obj.get("_id"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| LumenError::index("document has no string \"id\""))?;

        let mut doc = Document::new(id);
        for (key, value) in obj {
            if key == "id" || key == "_id" {
                continue;
            }
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(LumenError::index(format!(
                        "field '{key}' of document '{id}' is not a scalar value"
                    )));
                }
            };
            doc.fields.insert(key.clone(), text);
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_keep_insertion_order() {
        let doc = Document::new("x")
            .add_field("b", "2")
            .add_field("a", "1")
            .add_field("b", "3");
        let names: Vec<&str> = doc.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(doc.get_field("b"), Some("3"));
    }

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(&json!({
            "id": "post-1",
            "Title": "Hello",
            "Views": 42,
            "Draft": false,
            "Editor": null
        }))
        .unwrap();

        assert_eq!(doc.id, "post-1");
        assert_eq!(doc.get_field("Title"), Some("Hello"));
        assert_eq!(doc.get_field("Views"), Some("42"));
        assert_eq!(doc.get_field("Draft"), Some("false"));
        assert_eq!(doc.get_field("Editor"), None);
    }

    #[test]
    fn test_from_json_accepts_underscore_id() {
        let doc = Document::from_json(&json!({"_id": "b", "Title": "t"})).unwrap();
        assert_eq!(doc.id, "b");
    }

    #[test]
    fn test_from_json_rejects_invalid_input() {
        assert!(Document::from_json(&json!(["a"])).unwrap_err().is_index());
        assert!(Document::from_json(&json!({"Title": "t"})).unwrap_err().is_index());
        assert!(
            Document::from_json(&json!({"id": "a", "Tags": ["x"]}))
                .unwrap_err()
                .is_index()
        );
    }
}
