//! Error handling for the limitation analysis.
//!
//! Only structural problems are errors. Missing or malformed cells are a
//! data-quality matter and degrade to "not reported" values instead.

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

pub mod util;

/// Errors that can occur while loading a dataset or writing its tables
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Error decoding CSV data or working with Arrow arrays
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error decoding Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error serialising a summary table
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from the dataset header
    #[error("Required column '{0}' not found in dataset")]
    MissingColumn(String),

    /// The input path is neither a CSV/Parquet file nor a directory of them
    #[error("Unsupported input: {}", .0.display())]
    UnsupportedInput(PathBuf),

    /// The dataset contains no records
    #[error("Dataset is empty")]
    EmptyDataset,

    /// An I/O failure with the path it concerned
    #[error("{context}: {}: {source}", path.display())]
    PathIo {
        /// What was being attempted
        context: String,
        /// The path involved
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
}

impl AnalysisError {
    /// Wrap an I/O error with the path and operation it came from
    pub fn path_io(context: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::PathIo {
            context: context.into(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
