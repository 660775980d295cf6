//! Export functionality
//!
//! Renders an extracted [`SchemaDocument`](crate::models::SchemaDocument) as JSON.

pub mod json;

/// Result of an export operation.
///
/// Contains the exported content and format identifier.
#[derive(Debug)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use json::JsonExporter;
