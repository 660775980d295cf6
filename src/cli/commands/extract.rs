//! Extract command handler

use crate::cli::error::CliError;
use crate::export::JsonExporter;
use crate::import::{DEFAULT_SHEET_NAME, DEFAULT_WORKBOOK_PATH, SchemaExtractor, WorkbookLoader};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the extract command
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    pub input: PathBuf,
    pub sheet: String,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
    pub compact: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_WORKBOOK_PATH),
            sheet: DEFAULT_SHEET_NAME.to_string(),
            output: None,
            compact: false,
        }
    }
}

/// Load the workbook, extract the models and render the JSON document.
///
/// Nothing is written here; the full document is returned so callers never
/// emit partial output.
pub fn render_extract(args: &ExtractArgs) -> Result<String, CliError> {
    if args.sheet.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "Sheet name must not be empty".to_string(),
        ));
    }

    let grid = WorkbookLoader::new(&args.input)
        .with_sheet(&args.sheet)
        .load()?;
    let document = SchemaExtractor::new().extract(&grid);
    let result = JsonExporter::new().compact(args.compact).export(&document)?;
    info!(
        "Rendered {} models as {} ({} bytes)",
        document.len(),
        result.format,
        result.content.len()
    );
    Ok(result.content)
}

/// Run the extract command and write the document to stdout or `--output`.
pub fn handle_extract(args: &ExtractArgs) -> Result<(), CliError> {
    let content = render_extract(args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::IoError(format!("Failed to write stdout: {}", e)))?;
        }
    }

    Ok(())
}
