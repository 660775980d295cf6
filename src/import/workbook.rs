//! Workbook loader: copies one worksheet into a [`Grid`].
//!
//! Supports every format calamine detects from the file extension
//! (xlsx, xlsm, xlsb, xls, ods).

use super::{DEFAULT_SHEET_NAME, DEFAULT_WORKBOOK_PATH, LoadError};
use crate::models::Grid;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads the data-model sheet of a workbook.
#[derive(Debug, Clone)]
pub struct WorkbookLoader {
    path: PathBuf,
    sheet: String,
}

impl Default for WorkbookLoader {
    fn default() -> Self {
        Self::new(DEFAULT_WORKBOOK_PATH)
    }
}

impl WorkbookLoader {
    /// Create a loader for `path`, reading the default `dataModels` sheet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    /// Read a different sheet.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Open the workbook and copy the sheet into a grid.
    ///
    /// The grid is anchored at cell A1: leading empty rows and columns are
    /// kept as absent cells so indices match the sheet's own coordinates.
    /// The workbook is closed before this returns.
    pub fn load(&self) -> Result<Grid, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::FileNotFound(self.path.clone()));
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| LoadError::Workbook {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == &self.sheet) {
            return Err(LoadError::SheetNotFound {
                sheet: self.sheet.clone(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(&self.sheet)
            .map_err(|e| LoadError::Sheet {
                sheet: self.sheet.clone(),
                message: e.to_string(),
            })?;

        let grid = range_to_grid(&range);
        info!(
            "Loaded sheet '{}' from {} ({} rows x {} columns)",
            self.sheet,
            self.path.display(),
            grid.height(),
            grid.width()
        );
        Ok(grid)
    }
}

/// Copy a calamine range into a grid anchored at A1.
pub(crate) fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::default();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut grid = Grid::new(start_row + range.height(), start_col + range.width());
    for (row, col, data) in range.cells() {
        grid.set(start_row + row, start_col + col, cell_text(data));
    }
    grid
}

/// Datetime layout used for date cells, e.g. `2024-01-01 00:00:00`.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text form of a cell value; `None` for empty and error cells.
/// Booleans render as `True`/`False`.
pub(crate) fn cell_text(data: &Data) -> Option<String> {
    match data {
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(datetime) => datetime.format(DATETIME_FORMAT).to_string(),
            None => dt.as_f64().to_string(),
        }),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => {
            debug!("Treating error cell {:?} as empty", e);
            None
        }
        Data::Empty => None,
    }
}
