//! Data-model extractor - reads model definitions from a spreadsheet
//!
//! The source sheet lays models out side by side in 6-column blocks
//! (field, type, FK flag, FK target, note, spacer). This crate provides:
//! - Workbook loading into an in-memory grid
//! - Block extraction into an ordered model/field document
//! - JSON export of that document
//! - A CLI wrapper (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use export::{ExportError, ExportResult, JsonExporter};
pub use import::{ExtractOptions, FieldColumnOffsets, LoadError, SchemaExtractor, WorkbookLoader};
pub use models::{Field, Grid, ModelRecord, SchemaDocument, is_present};
