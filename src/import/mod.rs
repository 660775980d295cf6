//! Import functionality
//!
//! Reads data-model definitions from a spreadsheet:
//! - `workbook`: opens a workbook and copies one sheet into a [`Grid`](crate::models::Grid)
//! - `extractor`: walks the grid's 6-column blocks and builds a [`SchemaDocument`](crate::models::SchemaDocument)

pub mod extractor;
pub mod workbook;

use std::path::PathBuf;

/// Default workbook path, relative to the working directory.
pub const DEFAULT_WORKBOOK_PATH: &str = "data-models.xlsx";

/// Default name of the sheet holding the model definitions.
pub const DEFAULT_SHEET_NAME: &str = "dataModels";

/// Fatal error while loading the workbook or configuring extraction
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
    #[error("Sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    #[error("Failed to read sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Column offsets of a field's attributes relative to the block start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColumnOffsets {
    pub name: usize,
    pub field_type: usize,
    pub is_fk: usize,
    pub fk_target: usize,
    pub note: usize,
}

impl FieldColumnOffsets {
    /// Offsets used by the data-model sheet: name, type, FK, FK target, note.
    pub const STANDARD: Self = Self {
        name: 0,
        field_type: 1,
        is_fk: 2,
        fk_target: 3,
        note: 4,
    };

    /// Largest offset; a block must be wider than this.
    pub fn max_offset(&self) -> usize {
        self.name
            .max(self.field_type)
            .max(self.is_fk)
            .max(self.fk_target)
            .max(self.note)
    }
}

impl Default for FieldColumnOffsets {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Sheet layout used by the extractor
///
/// The defaults describe the data-model sheet: one model per 6-column block,
/// model names in row 0, header labels in row 2, data from row 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Columns per model block
    pub block_width: usize,
    /// Row holding the model name at each block start
    pub header_row: usize,
    /// First row holding field data
    pub data_start_row: usize,
    /// Header values that are layout placeholders rather than model names
    pub placeholder_names: Vec<String>,
    /// Rows whose name cell starts with this prefix are repeated header rows
    pub header_row_prefix: String,
    /// Attribute offsets within a block
    pub offsets: FieldColumnOffsets,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            block_width: 6,
            header_row: 0,
            data_start_row: 3,
            placeholder_names: vec!["Model".to_string(), "x".to_string()],
            header_row_prefix: "Field".to_string(),
            offsets: FieldColumnOffsets::STANDARD,
        }
    }
}

// Re-export for convenience
pub use extractor::SchemaExtractor;
pub use workbook::WorkbookLoader;
