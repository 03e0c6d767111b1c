//! The loaded set of studies

use arrow::record_batch::RecordBatch;

use crate::config::ColumnMap;
use crate::error::Result;
use crate::models::study::StudyRecord;
use crate::utils::arrow::StringColumn;

/// All studies of the review, in input order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<StudyRecord>,
}

impl Dataset {
    #[must_use]
    pub const fn from_records(records: Vec<StudyRecord>) -> Self {
        Self { records }
    }

    /// Build records from record batches using the configured headers.
    ///
    /// The five category columns are required; stratifier columns that are
    /// absent read as missing.
    pub fn from_batches(batches: &[RecordBatch], columns: &ColumnMap) -> Result<Self> {
        let total_rows = batches.iter().map(RecordBatch::num_rows).sum();
        let mut records = Vec::with_capacity(total_rows);

        for batch in batches {
            let categories = columns
                .categories
                .iter()
                .map(|name| StringColumn::resolve(batch, name, true))
                .collect::<Result<Vec<_>>>()?;
            let optional = |name: &str| StringColumn::resolve(batch, name, false);
            let region = optional(&columns.region)?;
            let setting = optional(&columns.setting)?;
            let funding = optional(&columns.funding)?;
            let year = optional(&columns.year)?;
            let topic = optional(&columns.topic)?;
            let journal_type = optional(&columns.journal_type)?;
            let multi_site = optional(&columns.multi_site)?;
            let urban_rural = optional(&columns.urban_rural)?;
            let design = optional(&columns.design)?;

            for row in 0..batch.num_rows() {
                records.push(StudyRecord {
                    limitations: std::array::from_fn(|i| categories[i].value(row)),
                    region: region.value(row),
                    setting: setting.value(row),
                    funding: funding.value(row),
                    year: year.value(row),
                    topic: topic.value(row),
                    journal_type: journal_type.value(row),
                    multi_site: multi_site.value(row),
                    urban_rural: urban_rural.value(row),
                    design: design.value(row),
                });
            }
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[StudyRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudyRecord> {
        self.records.iter()
    }
}

impl FromIterator<StudyRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = StudyRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a StudyRecord;
    type IntoIter = std::slice::Iter<'a, StudyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::models::category::LimitationCategory;
    use arrow::array::StringArray;
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn batch(with_research_capacity: bool) -> RecordBatch {
        let mut names: Vec<&str> = LimitationCategory::ALL
            .iter()
            .map(|c| c.column_name())
            .collect();
        if !with_research_capacity {
            names.pop();
        }
        names.push("Region ");

        let fields: Vec<Field> = names
            .iter()
            .map(|n| Field::new(*n, DataType::Utf8, true))
            .collect();
        let mut columns: Vec<Arc<dyn arrow::array::Array>> = names
            .iter()
            .map(|_| Arc::new(StringArray::from(vec![None::<&str>, None])) as _)
            .collect();
        columns[0] = Arc::new(StringArray::from(vec![Some("SMALL_SAMPLE: n=30"), Some("  ")]));
        let last = columns.len() - 1;
        columns[last] = Arc::new(StringArray::from(vec![Some("North Central"), None]));

        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap()
    }

    #[test]
    fn test_from_batches() {
        let dataset = Dataset::from_batches(&[batch(true)], &ColumnMap::default()).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(
            first.limitation(LimitationCategory::SamplingDesign),
            Some("SMALL_SAMPLE: n=30")
        );
        assert_eq!(first.region.as_deref(), Some("North Central"));
        assert_eq!(first.year, None);

        let second = &dataset.records()[1];
        assert!(!second.has_category(LimitationCategory::SamplingDesign));
    }

    #[test]
    fn test_missing_category_column_is_an_error() {
        let err = Dataset::from_batches(&[batch(false)], &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn(name) if name == "-- RESEARCH CAPACITY --"));
    }
}
