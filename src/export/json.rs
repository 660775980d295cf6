//! JSON exporter for extracted schema documents.

use super::{ExportError, ExportResult};
use crate::models::SchemaDocument;

/// Exporter for the JSON model document.
///
/// Pretty output uses 2-space indentation; models keep their sheet order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    compact: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render on a single line instead of pretty-printing.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Export a document to JSON text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use data_model_extract::export::JsonExporter;
    /// use data_model_extract::models::{Field, SchemaDocument};
    ///
    /// let mut doc = SchemaDocument::new();
    /// doc.model_mut("Widget").fields.push(Field::new("id").with_type("int"));
    ///
    /// let result = JsonExporter::new().export(&doc).unwrap();
    /// assert_eq!(result.format, "json");
    /// assert!(result.content.starts_with("{\n  \"Widget\": {"));
    /// ```
    pub fn export(&self, document: &SchemaDocument) -> Result<ExportResult, ExportError> {
        let content = if self.compact {
            serde_json::to_string(document)
        } else {
            serde_json::to_string_pretty(document)
        }
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use pretty_assertions::assert_eq;

    fn sample() -> SchemaDocument {
        let mut doc = SchemaDocument::new();
        doc.model_mut("Widget").fields.push(
            Field::new("owner_id")
                .with_type("int")
                .with_foreign_key("Y", "User"),
        );
        doc.model_mut("Empty");
        doc
    }

    #[test]
    fn test_export_pretty() {
        let result = JsonExporter::new().export(&sample()).unwrap();
        let expected = r#"{
  "Widget": {
    "fields": [
      {
        "name": "owner_id",
        "type": "int",
        "is_fk": "Y",
        "fk_target": "User",
        "note": null
      }
    ]
  },
  "Empty": {
    "fields": []
  }
}"#;
        assert_eq!(result.content, expected);
    }

    #[test]
    fn test_export_compact() {
        let result = JsonExporter::new().compact(true).export(&sample()).unwrap();
        assert!(!result.content.contains('\n'));
        assert!(result.content.starts_with(r#"{"Widget":{"fields":[{"name":"owner_id""#));
    }

    #[test]
    fn test_export_is_deterministic() {
        let doc = sample();
        let first = JsonExporter::new().export(&doc).unwrap();
        let second = JsonExporter::new().export(&doc).unwrap();
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_export_format_identifier() {
        let pretty = JsonExporter::new().export(&sample()).unwrap();
        let compact = JsonExporter::new().compact(true).export(&sample()).unwrap();
        assert_eq!(pretty.format, "json");
        assert_eq!(compact.format, "json");
    }

    #[test]
    fn test_export_empty_document() {
        let result = JsonExporter::new().export(&SchemaDocument::new()).unwrap();
        assert_eq!(result.content, "{}");
    }
}
