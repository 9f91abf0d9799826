//! Search hits and field selection.

use serde::Serialize;

use crate::data::DocumentId;
use crate::lexical::StoredFields;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub id: DocumentId,
    pub score: f32,
    /// Stored field values selected by [`ReturnFields`].
    pub fields: StoredFields,
}

/// Which stored fields a hit carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReturnFields {
    /// Every stored field (`"*"`).
    #[default]
    All,
    /// Only the named fields; names absent from a document are omitted.
    Named(Vec<String>),
}

impl ReturnFields {
    /// Return no stored fields.
    pub fn none() -> Self {
        ReturnFields::Named(Vec::new())
    }

    /// Select fields by name. A `"*"` anywhere in the list selects every field.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.iter().any(|name| name == "*") {
            ReturnFields::All
        } else {
            ReturnFields::Named(names)
        }
    }

    /// Copy the selected values out of a document's stored fields.
    pub fn select(&self, stored: &StoredFields) -> StoredFields {
        match self {
            ReturnFields::All => stored.clone(),
            ReturnFields::Named(names) => names
                .iter()
                .filter_map(|name| stored.get(name).map(|value| (name.clone(), value.clone())))
                .collect(),
        }
    }
}
