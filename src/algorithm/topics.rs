//! Topic-specific limitation patterns
//!
//! For each of the most common topic areas, every category's reporting rate
//! inside the topic is compared with the rate among all other studies. A
//! topic is the whole trimmed cell, so `"A; B"` is a topic of its own.

use serde::Serialize;

use crate::algorithm::frequency::{percentage, value_counts};
use crate::models::category::LimitationCategory;
use crate::models::study::StudyRecord;

/// One category's reporting inside vs outside a topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDifference {
    pub category: LimitationCategory,
    pub topic_percentage: f64,
    pub other_percentage: f64,
    /// `topic_percentage - other_percentage`, in percentage points
    pub difference: f64,
    /// Whether `|difference|` exceeds the configured threshold
    pub distinctive: bool,
}

/// Distinctiveness profile of one topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicProfile {
    pub topic: String,
    pub n: usize,
    pub differences: Vec<CategoryDifference>,
}

impl TopicProfile {
    /// Distinctive categories, in category order
    pub fn distinctive(&self) -> impl Iterator<Item = &CategoryDifference> {
        self.differences.iter().filter(|d| d.distinctive)
    }
}

/// Profile the `topic_count` most common topic areas.
///
/// Studies without a topic never form a group but do count among the "other"
/// studies of every topic.
#[must_use]
pub fn topic_distinctiveness(
    records: &[StudyRecord],
    topic_count: usize,
    threshold: f64,
) -> Vec<TopicProfile> {
    value_counts(records, |r| r.topic.as_deref())
        .into_iter()
        .take(topic_count)
        .map(|topic| {
            let (inside, outside): (Vec<&StudyRecord>, Vec<&StudyRecord>) = records
                .iter()
                .partition(|r| r.topic.as_deref() == Some(topic.value.as_str()));

            let differences = LimitationCategory::ALL
                .into_iter()
                .map(|category| {
                    let rate = |group: &[&StudyRecord]| {
                        percentage(
                            group.iter().filter(|r| r.has_category(category)).count(),
                            group.len(),
                        )
                    };
                    let topic_percentage = rate(inside.as_slice());
                    let other_percentage = rate(outside.as_slice());
                    let difference = topic_percentage - other_percentage;
                    CategoryDifference {
                        category,
                        topic_percentage,
                        other_percentage,
                        difference,
                        distinctive: difference.abs() > threshold,
                    }
                })
                .collect();

            TopicProfile {
                topic: topic.value,
                n: inside.len(),
                differences,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study(topic: Option<&str>, sampling: bool) -> StudyRecord {
        let record = StudyRecord {
            topic: topic.map(ToString::to_string),
            ..StudyRecord::default()
        };
        if sampling {
            record.with_limitation(LimitationCategory::SamplingDesign, "SMALL_SAMPLE")
        } else {
            record
        }
    }

    #[test]
    fn test_distinctiveness() {
        let records = vec![
            study(Some("Immunization"), true),
            study(Some("Immunization"), true),
            study(Some("Immunization; Child health outcomes"), true),
            study(Some("Maternal outcomes"), false),
            study(None, true),
        ];
        let profiles = topic_distinctiveness(&records, 5, 5.0);
        assert_eq!(profiles.len(), 3);

        let immunization = &profiles[0];
        assert_eq!(immunization.topic, "Immunization");
        assert_eq!(immunization.n, 2);
        let sampling = &immunization.differences[LimitationCategory::SamplingDesign.index()];
        assert!((sampling.topic_percentage - 100.0).abs() < 1e-9);
        assert!((sampling.other_percentage - 200.0 / 3.0).abs() < 1e-9);
        assert!((sampling.difference - 100.0 / 3.0).abs() < 1e-9);
        assert!(sampling.distinctive);

        // categories nobody reports are not distinctive
        assert_eq!(immunization.distinctive().count(), 1);
    }

    #[test]
    fn test_multi_topic_cell_is_its_own_topic() {
        let records = vec![
            study(Some("Maternal outcomes"), true),
            study(Some("Maternal outcomes ; Neonatal outcomes"), false),
        ];
        let profiles = topic_distinctiveness(&records, 5, 5.0);
        let topics: Vec<_> = profiles.iter().map(|p| (p.topic.as_str(), p.n)).collect();
        assert_eq!(
            topics,
            [("Maternal outcomes", 1), ("Maternal outcomes ; Neonatal outcomes", 1)]
        );
    }

    #[test]
    fn test_topic_count_limits_profiles() {
        let records = vec![
            study(Some("A"), false),
            study(Some("A"), false),
            study(Some("B"), false),
            study(Some("C"), false),
        ];
        let profiles = topic_distinctiveness(&records, 1, 5.0);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].topic, "A");
    }
}
