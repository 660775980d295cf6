//! Schema models produced by the extractor

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One field (row) of a model definition
///
/// Optional attributes serialize as JSON `null` when absent; they are never
/// skipped, so every field in the output carries all five keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared type (e.g. "int", "string", "references")
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    /// Foreign-key marker as written in the sheet (e.g. "Y", "FK")
    pub is_fk: Option<String>,
    /// Name of the model this field references
    pub fk_target: Option<String>,
    /// Free-text note
    pub note: Option<String>,
}

impl Field {
    /// Create a field with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: None,
            is_fk: None,
            fk_target: None,
            note: None,
        }
    }

    /// Set the field type.
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Set the foreign-key marker and target.
    pub fn with_foreign_key(mut self, is_fk: impl Into<String>, target: impl Into<String>) -> Self {
        self.is_fk = Some(is_fk.into());
        self.fk_target = Some(target.into());
        self
    }

    /// Set the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Fields of one model, in sheet row order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelRecord {
    pub fields: Vec<Field>,
}

/// Extraction result: model name to model record
///
/// Models keep the order in which their header was first encountered.
///
/// # Example
///
/// ```rust
/// use data_model_extract::models::{Field, SchemaDocument};
///
/// let mut doc = SchemaDocument::new();
/// doc.model_mut("Widget").fields.push(Field::new("id").with_type("int"));
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get("Widget").unwrap().fields[0].name, "id");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SchemaDocument {
    models: IndexMap<String, ModelRecord>,
}

impl SchemaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `name`, creating an empty one on first use.
    pub fn model_mut(&mut self, name: &str) -> &mut ModelRecord {
        self.models.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Model names in first-encountered order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelRecord)> {
        self.models.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Total number of fields across all models.
    pub fn field_count(&self) -> usize {
        self.models.values().map(|m| m.fields.len()).sum()
    }
}
