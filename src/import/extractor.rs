//! Block extractor for data-model sheets.
//!
//! The sheet is split into fixed-width column blocks. Each block whose header
//! cell names a model lists that model's fields, one per row:
//!
//! ```text
//! | Widget |      |    |           |             |   | Gadget | ...
//! |        |      |    |           |             |   |        |
//! | Field  | Type | FK | FK Target | Note        |   | Field  | ...
//! | id     | int  |    |           | primary key |   | id     | ...
//! ```
//!
//! Malformed rows are skipped and missing attribute cells become `None`;
//! extraction itself never fails.

use super::{ExtractOptions, LoadError};
use crate::models::{Field, Grid, SchemaDocument};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Extracts model definitions from a [`Grid`].
#[derive(Debug, Clone, Default)]
pub struct SchemaExtractor {
    options: ExtractOptions,
}

impl SchemaExtractor {
    /// Create an extractor for the standard data-model layout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use data_model_extract::import::SchemaExtractor;
    /// use data_model_extract::models::Grid;
    ///
    /// let cells = |row: &[&str]| -> Vec<Option<String>> {
    ///     row.iter()
    ///         .map(|c| (!c.is_empty()).then(|| c.to_string()))
    ///         .collect()
    /// };
    /// let grid = Grid::from_rows(vec![
    ///     cells(&["Widget", "", "", "", "", ""]),
    ///     cells(&[""]),
    ///     cells(&["Field", "Type", "FK", "FK Target", "Note", ""]),
    ///     cells(&["id", "int", "", "", "primary key", ""]),
    /// ]);
    ///
    /// let doc = SchemaExtractor::new().extract(&grid);
    /// let widget = doc.get("Widget").unwrap();
    /// assert_eq!(widget.fields[0].name, "id");
    /// assert_eq!(widget.fields[0].note.as_deref(), Some("primary key"));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor for a custom layout.
    ///
    /// Fails when the block is too narrow to hold every attribute column.
    pub fn with_options(options: ExtractOptions) -> Result<Self, LoadError> {
        let required = options.offsets.max_offset() + 1;
        if options.block_width < required {
            return Err(LoadError::InvalidLayout(format!(
                "block width {} is smaller than the {} attribute columns",
                options.block_width, required
            )));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every model defined in `grid`.
    ///
    /// Models appear in the order their header is first met. A name that
    /// repeats in a later block gets the later block's fields appended.
    pub fn extract(&self, grid: &Grid) -> SchemaDocument {
        let mut document = SchemaDocument::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for block_start in (0..grid.width()).step_by(self.options.block_width) {
            let Some(model_name) = self.model_name(grid, block_start) else {
                continue;
            };

            match first_seen.get(model_name) {
                Some(first_col) => warn!(
                    "Model '{}' defined again at column {} (first at column {}); merging fields",
                    model_name, block_start, first_col
                ),
                None => {
                    first_seen.insert(model_name.to_string(), block_start);
                }
            }

            let fields = self.block_fields(grid, block_start);
            debug!(
                "Block at column {}: model '{}' with {} fields",
                block_start,
                model_name,
                fields.len()
            );
            document.model_mut(model_name).fields.extend(fields);
        }

        info!(
            "Extracted {} models with {} fields",
            document.len(),
            document.field_count()
        );
        document
    }

    /// Model name at the block start, unless empty or a placeholder.
    ///
    /// The cell text is used as stored, so `"Widget"` and `"Widget "` name
    /// different models.
    fn model_name<'g>(&self, grid: &'g Grid, block_start: usize) -> Option<&'g str> {
        let name = grid.present_cell(self.options.header_row, block_start)?;
        if self.options.placeholder_names.iter().any(|p| p == name) {
            return None;
        }
        Some(name)
    }

    fn block_fields(&self, grid: &Grid, block_start: usize) -> Vec<Field> {
        (self.options.data_start_row..grid.height())
            .filter_map(|row| self.read_field(grid, row, block_start))
            .collect()
    }

    /// Read one data row of a block.
    ///
    /// A present name is required, so every returned field satisfies the
    /// "name or type present" inclusion rule.
    fn read_field(&self, grid: &Grid, row: usize, block_start: usize) -> Option<Field> {
        let offsets = &self.options.offsets;
        let value = |offset: usize| {
            grid.present_cell(row, block_start + offset)
                .map(str::to_string)
        };

        let name = value(offsets.name)?;
        if name.starts_with(self.options.header_row_prefix.as_str()) {
            return None;
        }

        Some(Field {
            name,
            field_type: value(offsets.field_type),
            is_fk: value(offsets.is_fk),
            fk_target: value(offsets.fk_target),
            note: value(offsets.note),
        })
    }
}
