//! CLI binary entry point for data-model-extract

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use data_model_extract::cli::commands::extract::{ExtractArgs, handle_extract};
#[cfg(feature = "cli")]
use data_model_extract::import::{DEFAULT_SHEET_NAME, DEFAULT_WORKBOOK_PATH};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "data-model-extract")]
#[command(about = "Extract data-model definitions from a spreadsheet as JSON")]
#[command(version)]
struct Cli {
    /// Workbook file (xlsx, xls, xlsb, ods)
    #[arg(default_value = DEFAULT_WORKBOOK_PATH)]
    input: PathBuf,
    /// Sheet holding the model blocks
    #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,
    /// Write JSON to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so stdout only ever carries the JSON document.
#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = ExtractArgs {
        input: cli.input,
        sheet: cli.sheet,
        output: cli.output,
        compact: cli.compact,
    };

    if let Err(e) = handle_extract(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
