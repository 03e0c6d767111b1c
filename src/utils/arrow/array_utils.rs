//! Utilities for working with Arrow arrays.
//!
//! Columns are located by header name with surrounding whitespace ignored and
//! converted to `Utf8` when they were stored with another type.

use arrow::array::{Array, ArrayRef};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{AnalysisError, Result};

/// Strip whitespace and a UTF-8 byte order mark from a header name
#[must_use]
pub fn normalize_header(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Index of the column whose normalised header equals the normalised `column_name`
#[must_use]
pub fn find_column(batch: &RecordBatch, column_name: &str) -> Option<usize> {
    let wanted = normalize_header(column_name);
    batch
        .schema()
        .fields()
        .iter()
        .position(|field| normalize_header(field.name()) == wanted)
}

/// Get a column from a record batch as `Utf8`
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The header of the column to extract
/// * `required` - Whether a missing column is an error or `Ok(None)`
pub fn get_column(batch: &RecordBatch, column_name: &str, required: bool) -> Result<Option<ArrayRef>> {
    let Some(idx) = find_column(batch, column_name) else {
        if required {
            return Err(AnalysisError::MissingColumn(column_name.to_string()));
        }
        debug!("Column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let column = batch.column(idx);
    if column.data_type() == &DataType::Utf8 {
        return Ok(Some(column.clone()));
    }

    debug!(
        "Converting column '{column_name}' from {:?} to Utf8",
        column.data_type()
    );
    Ok(Some(cast(column.as_ref(), &DataType::Utf8)?))
}
