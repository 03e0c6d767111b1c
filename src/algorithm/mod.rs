//! Analysis algorithms
//!
//! This module contains the counting and aggregation behind every analysis:
//!
//! - `extraction`: splitting annotation fields into limitation codes
//! - `frequency`: value counts and the code frequency table
//! - `cooccurrence`: pairwise co-occurrence of the most frequent codes
//! - `comparison`: limitation profiles of study groups
//! - `trends`: reporting across publication years
//! - `topics`: topic-specific distinctiveness
//! - `characteristics`: descriptive study characteristics

pub mod characteristics;
pub mod comparison;
pub mod cooccurrence;
pub mod extraction;
pub mod frequency;
pub mod topics;
pub mod trends;

pub use characteristics::{CategorySummary, StudyCharacteristics, category_summary};
pub use comparison::{GroupComparison, GroupProfile, GroupSelector, compare_groups};
pub use cooccurrence::{CooccurrenceMatrix, CooccurringPair};
pub use extraction::{CodeList, extract_codes, normalize_code};
pub use frequency::{CodeFrequency, CodeFrequencyTable, Share, ValueCount, percentage, value_counts};
pub use topics::{TopicProfile, topic_distinctiveness};
pub use trends::{CategoryTrend, CodeTrendTable, category_trends};
