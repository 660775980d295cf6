//! Extract command tests

use crate::common::{sample_rows, write_workbook};
use data_model_extract::cli::commands::extract::{ExtractArgs, handle_extract, render_extract};
use data_model_extract::cli::error::CliError;
use data_model_extract::import::LoadError;
use tempfile::TempDir;

#[test]
fn test_cli_render_pretty_json() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), "data-models.xlsx", "dataModels", &sample_rows());

    let args = ExtractArgs {
        input,
        ..ExtractArgs::default()
    };
    let content = render_extract(&args).unwrap();

    assert!(content.starts_with("{\n  \"User\": {\n    \"fields\": ["));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["Order"]["fields"][1]["fk_target"], "User");
    assert_eq!(value["User"]["fields"][0]["is_fk"], serde_json::Value::Null);
}

#[test]
fn test_cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), "data-models.xlsx", "dataModels", &sample_rows());
    let output = dir.path().join("models.json");

    let args = ExtractArgs {
        input,
        output: Some(output.clone()),
        compact: true,
        ..ExtractArgs::default()
    };
    handle_extract(&args).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.starts_with(r#"{"User":{"fields":"#));
}

#[test]
fn test_cli_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("models.json");

    let args = ExtractArgs {
        input: dir.path().join("data-models.xlsx"),
        output: Some(output.clone()),
        ..ExtractArgs::default()
    };
    let err = handle_extract(&args).unwrap_err();

    assert!(matches!(
        err,
        CliError::LoadError(LoadError::FileNotFound(_))
    ));
    assert!(!output.exists());
}

#[test]
fn test_cli_rejects_empty_sheet_name() {
    let args = ExtractArgs {
        sheet: "  ".to_string(),
        ..ExtractArgs::default()
    };
    let err = render_extract(&args).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}
