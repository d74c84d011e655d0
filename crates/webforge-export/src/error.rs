//! Export errors.

use std::path::PathBuf;
use thiserror::Error;
use webforge_codegen::CodegenError;

/// Errors while assembling or saving a project archive.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),

    #[error("Failed to render project file: {0}")]
    Codegen(#[from] CodegenError),

    #[error("Failed to serialize package manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to save archive to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
