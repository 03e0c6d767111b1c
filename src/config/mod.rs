//! Configuration for the limitation analysis.

use std::path::PathBuf;

use crate::models::category::LimitationCategory;

/// Environment variable overriding the co-occurrence matrix size
pub const TOP_N_ENV: &str = "LIMITATION_STATS_TOP_N";

/// Default number of codes in the co-occurrence matrix and the code preview
pub const DEFAULT_TOP_N: usize = 10;

/// Codes tracked by the contextual trend analysis
pub const DEFAULT_CONTEXTUAL_CODES: [&str; 4] = [
    "FUNDING_CONSTRAINTS",
    "TIME_CONSTRAINTS",
    "LOGISTICAL_ISSUES",
    "ETHICAL_CONSTRAINTS",
];

/// Dataset header names for every column the analysis reads.
///
/// Names are compared after trimming, so `"Journal type"` also matches a
/// header written as `"Journal type "`.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// One column per limitation category, in [`LimitationCategory::ALL`] order
    pub categories: [String; 5],
    pub region: String,
    pub setting: String,
    pub funding: String,
    pub year: String,
    pub topic: String,
    pub journal_type: String,
    pub multi_site: String,
    pub urban_rural: String,
    pub design: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            categories: LimitationCategory::ALL.map(|c| c.column_name().to_string()),
            region: "Region".to_string(),
            setting: "Study setting".to_string(),
            funding: "Funding sources".to_string(),
            year: "Year of publication".to_string(),
            topic: "Topic area".to_string(),
            journal_type: "Journal type".to_string(),
            multi_site: "Multi-site study".to_string(),
            urban_rural: "Urban\u{2013}Rural".to_string(),
            design: "Study design".to_string(),
        }
    }
}

/// Configuration for a full analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// CSV file, Parquet file, or directory of either
    pub input: PathBuf,
    /// Root directory for output tables
    pub output_dir: PathBuf,
    /// Number of codes, and of ranked co-occurring pairs, printed to the console
    pub code_preview: usize,
    /// Number of codes in the co-occurrence matrix
    pub cooccurrence_top_n: usize,
    /// Number of codes followed across publication years
    pub trend_top_n: usize,
    /// Number of topic areas compared for distinctiveness
    pub topic_count: usize,
    /// Percentage-point difference at which a topic/category pair is distinctive
    pub distinctiveness_threshold: f64,
    /// Codes followed by the contextual trend analysis
    pub contextual_codes: Vec<String>,
    /// Dataset header names
    pub columns: ColumnMap,
    /// Show a progress bar while analyses run
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/raw/Extracted_data_v1.csv"),
            output_dir: PathBuf::from("outputs"),
            code_preview: DEFAULT_TOP_N,
            cooccurrence_top_n: top_n_from_env().unwrap_or(DEFAULT_TOP_N),
            trend_top_n: 5,
            topic_count: 5,
            distinctiveness_threshold: 5.0,
            contextual_codes: DEFAULT_CONTEXTUAL_CODES
                .iter()
                .map(ToString::to_string)
                .collect(),
            columns: ColumnMap::default(),
            show_progress: true,
        }
    }
}

impl AnalysisConfig {
    /// Directory that receives the JSON tables
    #[must_use]
    pub fn tables_dir(&self) -> PathBuf {
        self.output_dir.join("tables")
    }
}

/// Helper function to get the co-occurrence size from environment
#[must_use]
pub fn top_n_from_env() -> Option<usize> {
    std::env::var(TOP_N_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns_follow_category_order() {
        let columns = ColumnMap::default();
        assert_eq!(columns.categories[0], "-- SAMPLING & DESIGN --");
        assert_eq!(columns.categories[4], "-- RESEARCH CAPACITY --");
        assert_eq!(columns.urban_rural, "Urban–Rural");
    }

    #[test]
    fn test_tables_dir() {
        let config = AnalysisConfig {
            output_dir: PathBuf::from("/tmp/out"),
            ..AnalysisConfig::default()
        };
        assert_eq!(config.tables_dir(), PathBuf::from("/tmp/out/tables"));
    }
}
