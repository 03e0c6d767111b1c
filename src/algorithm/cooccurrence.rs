//! Co-occurrence of limitation codes within studies
//!
//! For a chosen set of codes (usually the most frequent ones) the matrix
//! records how many studies report each pair together. A study contributes at
//! most once to any cell, however many fields or tokens repeat the pair.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::algorithm::frequency::percentage;
use crate::models::category::LimitationCategory;
use crate::models::study::StudyRecord;

/// Symmetric pair counts over a fixed list of codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooccurrenceMatrix {
    codes: Vec<String>,
    /// Row-major `size * size` counts; the diagonal stays zero
    counts: Vec<usize>,
    total_records: usize,
}

/// Two codes reported together, with their joint share of all studies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CooccurringPair {
    pub first: String,
    pub second: String,
    pub count: usize,
    pub percentage: f64,
}

/// Serialisable form of the matrix
#[derive(Debug, Clone, Serialize)]
pub struct CooccurrenceTable {
    pub codes: Vec<String>,
    pub total_records: usize,
    pub counts: Vec<Vec<usize>>,
    pub percentages: Vec<Vec<f64>>,
    pub pairs: Vec<CooccurringPair>,
}

impl CooccurrenceMatrix {
    /// Count pairwise co-occurrence of `codes` across `categories`.
    ///
    /// Per record, the distinct codes of interest present in any scanned
    /// field are collected; every unordered pair of them increments both
    /// symmetric cells by one. Records with fewer than two such codes add
    /// nothing. A code listed twice in `codes` keeps its first position.
    #[must_use]
    pub fn build(
        records: &[StudyRecord],
        categories: &[LimitationCategory],
        codes: &[String],
    ) -> Self {
        let size = codes.len();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, code) in codes.iter().enumerate() {
            index.entry(code.as_str()).or_insert(i);
        }

        let mut counts = vec![0; size * size];
        for record in records {
            let mut present: SmallVec<[usize; 16]> = SmallVec::new();
            for code in record.codes(categories) {
                if let Some(&i) = index.get(code) {
                    if !present.contains(&i) {
                        present.push(i);
                    }
                }
            }

            for (&a, &b) in present.iter().tuple_combinations() {
                counts[a * size + b] += 1;
                counts[b * size + a] += 1;
            }
        }

        Self {
            codes: codes.to_vec(),
            counts,
            total_records: records.len(),
        }
    }

    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    /// Count at row `i`, column `j`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[must_use]
    pub fn count(&self, i: usize, j: usize) -> usize {
        assert!(i < self.size() && j < self.size(), "matrix index out of range");
        self.counts[i * self.size() + j]
    }

    /// Count for a pair of codes, `None` if either is not in the matrix
    #[must_use]
    pub fn count_for(&self, first: &str, second: &str) -> Option<usize> {
        let i = self.position(first)?;
        let j = self.position(second)?;
        Some(self.count(i, j))
    }

    /// Cell `(i, j)` as a percentage of all records
    #[must_use]
    pub fn percentage(&self, i: usize, j: usize) -> f64 {
        percentage(self.count(i, j), self.total_records)
    }

    /// Counts as nested rows
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<usize>> {
        if self.size() == 0 {
            return Vec::new();
        }
        self.counts.chunks(self.size()).map(<[usize]>::to_vec).collect()
    }

    /// Percentages as nested rows
    #[must_use]
    pub fn percentage_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size())
            .map(|i| (0..self.size()).map(|j| self.percentage(i, j)).collect())
            .collect()
    }

    /// Sum of all cells above the diagonal
    #[must_use]
    pub fn pair_total(&self) -> usize {
        (0..self.size())
            .tuple_combinations()
            .map(|(i, j)| self.count(i, j))
            .sum()
    }

    /// Non-zero pairs, highest percentage first; ties keep matrix order
    #[must_use]
    pub fn ranked_pairs(&self) -> Vec<CooccurringPair> {
        let mut pairs: Vec<CooccurringPair> = (0..self.size())
            .tuple_combinations()
            .filter(|&(i, j)| self.count(i, j) > 0)
            .map(|(i, j)| CooccurringPair {
                first: self.codes[i].clone(),
                second: self.codes[j].clone(),
                count: self.count(i, j),
                percentage: self.percentage(i, j),
            })
            .collect();
        pairs.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        pairs
    }

    #[must_use]
    pub fn to_table(&self) -> CooccurrenceTable {
        CooccurrenceTable {
            codes: self.codes.clone(),
            total_records: self.total_records,
            counts: self.rows(),
            percentages: self.percentage_rows(),
            pairs: self.ranked_pairs(),
        }
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| c == code)
    }
}

impl Serialize for CooccurrenceMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_table().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LimitationCategory::{AnalysisGeneralizability, ContextLogistics, SamplingDesign};

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn record(fields: &[(LimitationCategory, &str)]) -> StudyRecord {
        fields
            .iter()
            .fold(StudyRecord::default(), |r, (c, text)| r.with_limitation(*c, *text))
    }

    #[test]
    fn test_three_codes_increment_three_pairs() {
        let records = vec![record(&[
            (SamplingDesign, "A: one; B: two"),
            (ContextLogistics, "C: three"),
        ])];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &codes(&["A", "B", "C", "D"]));

        assert_eq!(matrix.count_for("A", "B"), Some(1));
        assert_eq!(matrix.count_for("B", "C"), Some(1));
        assert_eq!(matrix.count_for("A", "C"), Some(1));
        assert_eq!(matrix.count_for("A", "D"), Some(0));
        assert_eq!(matrix.pair_total(), 3);
        for i in 0..matrix.size() {
            assert_eq!(matrix.count(i, i), 0);
        }
    }

    #[test]
    fn test_single_code_contributes_nothing() {
        let records = vec![record(&[(SamplingDesign, "A; A"), (ContextLogistics, "A: again; Z")])];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &codes(&["A", "B"]));
        assert!(matrix.rows().iter().flatten().all(|&c| c == 0));
    }

    #[test]
    fn test_repeated_pair_counts_once_per_record() {
        let records = vec![record(&[
            (SamplingDesign, "A; B"),
            (ContextLogistics, "B; A"),
            (AnalysisGeneralizability, "A: x; B: y; A"),
        ])];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &codes(&["A", "B"]));
        assert_eq!(matrix.count(0, 1), 1);
        assert_eq!(matrix.count(1, 0), 1);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let records = vec![
            record(&[(SamplingDesign, "A; B; C")]),
            record(&[(SamplingDesign, "C"), (ContextLogistics, "B")]),
            record(&[(ContextLogistics, "A; C")]),
        ];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &codes(&["A", "B", "C"]));
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.count(i, j), matrix.count(j, i));
            }
        }
        assert_eq!(matrix.count_for("B", "C"), Some(2));
        assert_eq!(matrix.count_for("A", "C"), Some(2));
        // each record adds at most C(3, 2) pairs
        assert!(matrix.pair_total() <= records.len() * 3);
    }

    #[test]
    fn test_only_scanned_categories_count() {
        let records = vec![record(&[(SamplingDesign, "A"), (ContextLogistics, "B")])];
        let matrix = CooccurrenceMatrix::build(&records, &[SamplingDesign], &codes(&["A", "B"]));
        assert_eq!(matrix.count_for("A", "B"), Some(0));
    }

    #[test]
    fn test_percentages_and_ranking() {
        let records = vec![
            record(&[(SamplingDesign, "A; B; C")]),
            record(&[(SamplingDesign, "B; C")]),
            record(&[(SamplingDesign, "D")]),
            StudyRecord::default(),
        ];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &codes(&["A", "B", "C"]));
        assert!((matrix.percentage(1, 2) - 50.0).abs() < 1e-9);

        let pairs = matrix.ranked_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!((pairs[0].first.as_str(), pairs[0].second.as_str()), ("B", "C"));
        assert_eq!(pairs[0].count, 2);
        // tie between (A, B) and (A, C) keeps matrix order
        assert_eq!(pairs[1].second, "B");
        assert_eq!(pairs[2].second, "C");
    }

    #[test]
    fn test_empty_code_list() {
        let records = vec![record(&[(SamplingDesign, "A; B")])];
        let matrix = CooccurrenceMatrix::build(&records, &LimitationCategory::ALL, &[]);
        assert_eq!(matrix.size(), 0);
        assert!(matrix.rows().is_empty());
        assert!(matrix.ranked_pairs().is_empty());
    }
}
