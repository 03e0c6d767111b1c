//! Field extraction utilities for Arrow record batches

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow::array_utils::get_column;

/// A text column resolved once per batch; absent columns read as all-missing
#[derive(Debug, Clone)]
pub struct StringColumn {
    array: Option<StringArray>,
}

impl StringColumn {
    /// Resolve a column by header name; [`get_column`] has already cast it to `Utf8`
    pub fn resolve(batch: &RecordBatch, column_name: &str, required: bool) -> Result<Self> {
        let array = get_column(batch, column_name, required)?
            .and_then(|array| array.as_any().downcast_ref::<StringArray>().cloned());
        Ok(Self { array })
    }

    /// Trimmed value at `row`, `None` for null, blank, or absent
    #[must_use]
    pub fn value(&self, row: usize) -> Option<String> {
        extract_string(self.array.as_ref()?, row)
    }
}

/// Extract a trimmed string value from a string array
///
/// # Returns
///
/// * `Some(String)` - The trimmed value
/// * `None` - If the row is out of range, null, or blank after trimming
#[must_use]
pub fn extract_string(array: &StringArray, row: usize) -> Option<String> {
    if row >= array.len() || array.is_null(row) {
        return None;
    }
    let value = array.value(row).trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    #[test]
    fn test_extract_string_trims_and_drops_blanks() {
        let array = StringArray::from(vec![Some("  North "), Some("   "), None]);
        assert_eq!(extract_string(&array, 0), Some("North".to_string()));
        assert_eq!(extract_string(&array, 1), None);
        assert_eq!(extract_string(&array, 2), None);
        assert_eq!(extract_string(&array, 3), None);
    }

    #[test]
    fn test_absent_optional_column_reads_missing() {
        let schema = Schema::new(vec![Field::new("Region", DataType::Utf8, true)]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(StringArray::from(vec![Some("South")]))],
        )
        .unwrap();

        let region = StringColumn::resolve(&batch, "Region", true).unwrap();
        assert_eq!(region.value(0), Some("South".to_string()));

        let topic = StringColumn::resolve(&batch, "Topic area", false).unwrap();
        assert_eq!(topic.value(0), None);
    }
}
