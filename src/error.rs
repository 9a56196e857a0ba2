//! Conversion errors
//!
//! Fatal errors abort a pipeline; row errors are reported and, depending on
//! the row policy, skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// A single input row that could not be mapped to a record
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}: {reason} (row: {fields:?})")]
pub struct RowError {
    /// 1-based line number in the input file
    pub line: u64,
    /// Raw field values as read from the file
    pub fields: Vec<String>,
    pub reason: String,
}

/// Conversion error types
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed row in {}: {row}", .path.display())]
    Row {
        path: PathBuf,
        #[source]
        row: RowError,
    },
}

impl ConvertError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        ConvertError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
