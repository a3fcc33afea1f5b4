use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported data file (expected .json or .csv): {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Duplicate contract id: {0}")]
    DuplicateId(i64),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);
