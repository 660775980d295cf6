//! CLI-specific error types

use crate::export::ExportError;
use crate::import::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(String),
}
