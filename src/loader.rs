//! Dataset loading
//!
//! The review dataset is read from CSV or Parquet into Arrow record batches.
//! CSV columns are all read as text; the analyses parse what they need. Rows
//! shorter than the header are padded with nulls, as spreadsheet exports
//! often drop trailing empty cells.

use std::fs;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::config::ColumnMap;
use crate::error::util::safe_open_file;
use crate::error::{AnalysisError, Result};
use crate::models::dataset::Dataset;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Default number of rows per record batch
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Parquet,
}

impl InputFormat {
    /// Detect the format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Read a CSV file with a header row, every column as nullable `Utf8`.
///
/// Missing trailing cells read as nulls.
pub fn read_csv(path: &Path) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading CSV dataset")?;

    let format = Format::default()
        .with_header(true)
        .with_truncated_rows(true);
    let (inferred, _) = format.infer_schema(&mut file, None)?;
    file.seek(SeekFrom::Start(0))
        .map_err(|e| AnalysisError::path_io("Failed to rewind CSV file", path, e))?;

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();

    let reader = ReaderBuilder::new(Arc::new(Schema::new(fields)))
        .with_format(format)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    Ok(reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?)
}

/// Read a Parquet file into record batches
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet dataset")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build()?;

    Ok(reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?)
}

/// Read one input file, dispatching on its extension
pub fn read_file(path: &Path) -> Result<Vec<RecordBatch>> {
    match InputFormat::from_path(path) {
        Some(InputFormat::Csv) => read_csv(path),
        Some(InputFormat::Parquet) => read_parquet(path),
        None => Err(AnalysisError::UnsupportedInput(path.to_path_buf())),
    }
}

/// Find all CSV and Parquet files directly inside a directory, sorted by path
pub fn find_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| AnalysisError::path_io("Failed to read directory", dir, e))?;

    let files = entries
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| AnalysisError::path_io("Failed to read directory entry", dir, e))
        })
        .filter_ok(|path| path.is_file() && InputFormat::from_path(path).is_some())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log_warning("No CSV or Parquet files found in directory", Some(dir));
    }
    Ok(files)
}

/// Load record batches from a file or from every input file in a directory.
///
/// Directory contents are read in parallel and concatenated in path order.
pub fn load_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Loading dataset from", path);

    let batches = if path.is_dir() {
        let files = find_input_files(path)?;
        files
            .par_iter()
            .map(|file| read_file(file))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect_vec()
    } else {
        read_file(path)?
    };

    log_operation_complete("loaded", path, batches.len(), Some(start.elapsed()));
    Ok(batches)
}

/// Load the review dataset into study records.
///
/// An input without any rows is rejected with [`AnalysisError::EmptyDataset`].
pub fn load_dataset(path: &Path, columns: &ColumnMap) -> Result<Dataset> {
    let batches = load_batches(path)?;
    let dataset = Dataset::from_batches(&batches, columns)?;
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    log::info!("Dataset: {} studies", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(InputFormat::from_path(Path::new("a/b.CSV")), Some(InputFormat::Csv));
        assert_eq!(
            InputFormat::from_path(Path::new("data.parquet")),
            Some(InputFormat::Parquet)
        );
        assert_eq!(InputFormat::from_path(Path::new("data.xlsx")), None);
        assert_eq!(InputFormat::from_path(Path::new("data")), None);
    }

    #[test]
    fn test_unsupported_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extract.xlsx");
        fs::write(&path, b"not a table").unwrap();
        assert!(matches!(read_file(&path), Err(AnalysisError::UnsupportedInput(_))));
    }
}
