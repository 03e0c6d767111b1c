//! Descriptive characteristics of the included studies

use serde::Serialize;

use crate::algorithm::frequency::{ValueCount, percentage, value_counts};
use crate::algorithm::trends::by_year;
use crate::models::category::LimitationCategory;
use crate::models::study::StudyRecord;

/// Studies published in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Design, region and publication-year distributions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyCharacteristics {
    pub total_studies: usize,
    pub designs: Vec<ValueCount>,
    pub regions: Vec<ValueCount>,
    pub years: Vec<YearCount>,
}

impl StudyCharacteristics {
    #[must_use]
    pub fn from_records(records: &[StudyRecord]) -> Self {
        Self {
            total_studies: records.len(),
            designs: value_counts(records, |r| r.design.as_deref()),
            regions: value_counts(records, |r| Some(r.region().label())),
            years: by_year(records)
                .into_iter()
                .map(|(year, studies)| YearCount {
                    year,
                    count: studies.len(),
                })
                .collect(),
        }
    }

    /// First and last publication year, if any year parsed
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((self.years.first()?.year, self.years.last()?.year))
    }
}

/// How many studies report a broad category at all
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: LimitationCategory,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Reporting rate of every category, most reported first
#[must_use]
pub fn category_summary(records: &[StudyRecord]) -> Vec<CategorySummary> {
    let mut summary: Vec<CategorySummary> = LimitationCategory::ALL
        .into_iter()
        .map(|category| {
            let count = records.iter().filter(|r| r.has_category(category)).count();
            CategorySummary {
                category,
                label: category.display_name(),
                count,
                percentage: percentage(count, records.len()),
            }
        })
        .collect();
    summary.sort_by(|a, b| b.count.cmp(&a.count));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use LimitationCategory::{MeasurementData, ResearchCapacity, SamplingDesign};

    #[test]
    fn test_category_summary_sorted() {
        let records = vec![
            StudyRecord::default()
                .with_limitation(MeasurementData, "RECALL_BIAS")
                .with_limitation(SamplingDesign, "SMALL_SAMPLE"),
            StudyRecord::default().with_limitation(MeasurementData, "SELF_REPORT"),
            StudyRecord::default(),
        ];
        let summary = category_summary(&records);
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].category, MeasurementData);
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[1].category, SamplingDesign);
        assert!((summary[1].percentage - 100.0 / 3.0).abs() < 1e-9);
        let capacity = summary.iter().find(|s| s.category == ResearchCapacity).unwrap();
        assert_eq!(capacity.count, 0);
    }

    #[test]
    fn test_characteristics() {
        let records = vec![
            StudyRecord {
                design: Some("Cross-sectional".into()),
                region: Some("North-East".into()),
                year: Some("2021".into()),
                ..StudyRecord::default()
            },
            StudyRecord {
                design: Some("Cross-sectional".into()),
                region: Some("South-West".into()),
                year: Some("2014".into()),
                ..StudyRecord::default()
            },
            StudyRecord::default(),
        ];
        let characteristics = StudyCharacteristics::from_records(&records);
        assert_eq!(characteristics.total_studies, 3);
        assert_eq!(characteristics.designs[0].count, 2);
        assert_eq!(characteristics.regions.len(), 3);
        assert_eq!(characteristics.year_span(), Some((2014, 2021)));
    }
}
