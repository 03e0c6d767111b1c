//! Frequency tables
//!
//! Counting helpers shared by the analyses: generic value counts over a
//! record attribute and the per-code frequency table.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::category::LimitationCategory;
use crate::models::study::StudyRecord;

/// `count` as a percentage of `total`, `0.0` when `total` is zero
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// A count with its share of the relevant total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub count: usize,
    pub percentage: f64,
}

impl Share {
    #[must_use]
    pub fn of(count: usize, total: usize) -> Self {
        Self {
            count,
            percentage: percentage(count, total),
        }
    }
}

/// Occurrences of one attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count distinct values of an attribute, most frequent first.
///
/// Records for which `key` returns `None` are not counted but still make up
/// the percentage denominator. Ties keep first-encountered order.
pub fn value_counts<'a, K>(records: &'a [StudyRecord], key: K) -> Vec<ValueCount>
where
    K: Fn(&'a StudyRecord) -> Option<&'a str>,
{
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for value in records.iter().filter_map(&key) {
        match index.get(value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
            percentage: percentage(count, records.len()),
        })
        .collect()
}

/// One row of the code frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeFrequency {
    pub code: String,
    /// Records carrying the code at least once
    pub count: usize,
    /// `count` as a percentage of all records
    pub percentage: f64,
}

/// How many records report each limitation code
#[derive(Debug, Clone, Default, Serialize)]
pub struct CodeFrequencyTable {
    total_records: usize,
    entries: Vec<CodeFrequency>,
}

impl CodeFrequencyTable {
    /// Count, per code, the records containing it in any of `categories`.
    ///
    /// A record counts once per code no matter how many fields or tokens
    /// repeat it. Entries are sorted by count, descending; ties keep the order
    /// in which codes were first met (records in order, fields in category
    /// order).
    #[must_use]
    pub fn from_records(records: &[StudyRecord], categories: &[LimitationCategory]) -> Self {
        let mut order: Vec<(&str, usize)> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();

        for record in records {
            for code in record.distinct_codes(categories) {
                match index.get(code) {
                    Some(&i) => order[i].1 += 1,
                    None => {
                        index.insert(code, order.len());
                        order.push((code, 1));
                    }
                }
            }
        }

        order.sort_by(|a, b| b.1.cmp(&a.1));
        let entries = order
            .into_iter()
            .map(|(code, count)| CodeFrequency {
                code: code.to_string(),
                count,
                percentage: percentage(count, records.len()),
            })
            .collect();

        Self {
            total_records: records.len(),
            entries,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CodeFrequency] {
        &self.entries
    }

    /// The `n` most frequent codes
    #[must_use]
    pub fn top_codes(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).map(|e| e.code.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CodeFrequency> {
        self.entries.iter().find(|e| e.code == code)
    }

    #[must_use]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LimitationCategory::{ContextLogistics, SamplingDesign};

    fn record(sampling: Option<&str>, context: Option<&str>) -> StudyRecord {
        let mut record = StudyRecord::default();
        if let Some(text) = sampling {
            record = record.with_limitation(SamplingDesign, text);
        }
        if let Some(text) = context {
            record = record.with_limitation(ContextLogistics, text);
        }
        record
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert!((percentage(3, 0)).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_counts_code_once() {
        let records = vec![
            record(Some("A: x; A: y"), Some("A; B")),
            record(None, Some("B: z")),
        ];
        let table = CodeFrequencyTable::from_records(&records, &LimitationCategory::ALL);
        assert_eq!(table.get("A").unwrap().count, 1);
        assert_eq!(table.get("B").unwrap().count, 2);
        assert!((table.get("B").unwrap().percentage - 100.0).abs() < 1e-9);
        assert_eq!(table.total_records(), 2);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let records = vec![
            record(Some("C; A"), None),
            record(Some("B"), Some("A")),
            record(Some("B; C"), None),
        ];
        let table = CodeFrequencyTable::from_records(&records, &LimitationCategory::ALL);
        let codes: Vec<_> = table.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["C", "A", "B"]);
        assert_eq!(table.top_codes(2), ["C", "A"]);
    }

    #[test]
    fn test_empty_codes_are_discarded() {
        let records = vec![record(Some(";: note;  "), None)];
        let table = CodeFrequencyTable::from_records(&records, &LimitationCategory::ALL);
        assert!(table.is_empty());
    }

    #[test]
    fn test_value_counts() {
        let records = vec![
            StudyRecord {
                setting: Some("Facility-based".into()),
                ..StudyRecord::default()
            },
            StudyRecord {
                setting: Some("Community-based".into()),
                ..StudyRecord::default()
            },
            StudyRecord {
                setting: Some("Community-based".into()),
                ..StudyRecord::default()
            },
            StudyRecord::default(),
        ];
        let counts = value_counts(&records, |r| r.setting.as_deref());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].value, "Community-based");
        assert_eq!(counts[0].count, 2);
        assert!((counts[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(counts[1].value, "Facility-based");
    }
}
