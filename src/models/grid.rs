//! Grid model for the extractor
//!
//! A `Grid` is the in-memory copy of one worksheet: a rectangle of optional
//! text cells addressed by absolute (row, column) coordinates.

/// Returns true when a cell holds usable text.
///
/// Missing cells, empty strings and whitespace-only strings are all treated
/// as absent. Every cell read by the extractor goes through this predicate.
pub fn is_present(cell: Option<&str>) -> bool {
    cell.is_some_and(|text| !text.trim().is_empty())
}

/// Rectangular grid of optional text cells
///
/// Rows shorter than the grid width are padded with absent cells, so every
/// row has exactly `width()` entries.
///
/// # Example
///
/// ```rust
/// use data_model_extract::models::Grid;
///
/// let grid = Grid::from_rows(vec![
///     vec![Some("Widget".to_string())],
///     vec![],
///     vec![Some("Field".to_string()), Some("Type".to_string())],
/// ]);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.cell(0, 0), Some("Widget"));
/// assert_eq!(grid.cell(0, 7), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
    width: usize,
}

impl Grid {
    /// Create an empty grid with the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![None; width]; height],
            width,
        }
    }

    /// Build a grid from possibly ragged rows.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { rows, width }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounds-checked cell accessor.
    ///
    /// Coordinates outside the grid resolve to `None` instead of panicking.
    /// Present-but-blank cells are returned as stored; use [`is_present`]
    /// or [`Grid::present_cell`] to filter them.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Like [`Grid::cell`] but only returns cells that pass [`is_present`].
    pub fn present_cell(&self, row: usize, col: usize) -> Option<&str> {
        let cell = self.cell(row, col);
        if is_present(cell) { cell } else { None }
    }

    /// Store a value. Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Option<String>) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Option<String> {
        Some(text.to_string())
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("id")));
        assert!(is_present(Some(" - ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(Some("   \t")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let grid = Grid::from_rows(vec![vec![s("a")], vec![s("b"), s("c"), s("d")]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(1, 2), Some("d"));
    }

    #[test]
    fn test_out_of_range_cells_are_absent() {
        let grid = Grid::from_rows(vec![vec![s("a"), s("b")]]);
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(5, 0), None);
        assert_eq!(grid.present_cell(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_present_cell_filters_blank_text() {
        let grid = Grid::from_rows(vec![vec![s("  "), s("x")]]);
        assert_eq!(grid.cell(0, 0), Some("  "));
        assert_eq!(grid.present_cell(0, 0), None);
        assert_eq!(grid.present_cell(0, 1), Some("x"));
    }

    #[test]
    fn test_set_ignores_out_of_range_writes() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, s("v"));
        grid.set(4, 4, s("lost"));
        assert_eq!(grid.cell(1, 1), Some("v"));
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
    }
}
