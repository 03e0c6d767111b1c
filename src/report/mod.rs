//! The full analysis report
//!
//! Runs every analysis over a dataset, prints the summaries and writes each
//! table as JSON under the output directory.

pub mod console;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use log::{debug, info};
use serde::Serialize;

use crate::algorithm::characteristics::{CategorySummary, StudyCharacteristics, category_summary};
use crate::algorithm::comparison::{self, GroupComparison};
use crate::algorithm::cooccurrence::CooccurrenceMatrix;
use crate::algorithm::frequency::CodeFrequencyTable;
use crate::algorithm::topics::{TopicProfile, topic_distinctiveness};
use crate::algorithm::trends::{CategoryTrend, CodeTrendTable, category_trends};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::error::util::{ensure_directory, safe_write};
use crate::models::category::LimitationCategory;
use crate::models::dataset::Dataset;
use crate::utils::logging::{create_analysis_progress_bar, finish_progress_bar, log_table_written};

/// Number of analyses a report runs
pub const ANALYSIS_COUNT: u64 = 14;

/// File name of the table index
pub const MANIFEST_FILE: &str = "manifest.json";

/// Results of every analysis over one dataset
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub total_studies: usize,
    pub characteristics: StudyCharacteristics,
    pub categories: Vec<CategorySummary>,
    pub codes: CodeFrequencyTable,
    pub setting: GroupComparison,
    pub region: GroupComparison,
    pub trends: Vec<CategoryTrend>,
    pub contextual_trends: CodeTrendTable,
    pub topics: Vec<TopicProfile>,
    pub funding: GroupComparison,
    pub urban_rural: GroupComparison,
    pub multi_site: GroupComparison,
    pub journal_type: GroupComparison,
    /// Yearly reporting of the most frequent codes
    pub code_trends: CodeTrendTable,
    pub cooccurrence: CooccurrenceMatrix,
}

/// Index of the tables written for one run
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub total_studies: usize,
    pub tables: Vec<String>,
}

impl AnalysisReport {
    /// Run every analysis over the dataset
    #[must_use]
    pub fn run(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        let records = dataset.records();
        let categories = &LimitationCategory::ALL;
        let pb = create_analysis_progress_bar(ANALYSIS_COUNT, config.show_progress);

        let characteristics = step(&pb, "Study characteristics", || {
            StudyCharacteristics::from_records(records)
        });
        let category_table = step(&pb, "Limitation categories", || category_summary(records));
        let codes = step(&pb, "Specific limitation codes", || {
            CodeFrequencyTable::from_records(records, categories)
        });
        let setting = step(&pb, "Facility vs community", || comparison::setting_comparison(records));
        let region = step(&pb, "Regional comparison", || comparison::region_comparison(records));
        let trends = step(&pb, "Trends over time", || category_trends(records));
        let contextual_trends = step(&pb, "Contextual limitation trends", || {
            CodeTrendTable::build(records, &config.contextual_codes)
        });
        let topics = step(&pb, "Topic areas", || {
            topic_distinctiveness(records, config.topic_count, config.distinctiveness_threshold)
        });
        let funding = step(&pb, "Funding", || comparison::funding_comparison(records));
        let urban_rural = step(&pb, "Urban-rural settings", || {
            comparison::urban_rural_comparison(records)
        });
        let multi_site = step(&pb, "Multi-site vs single-site", || {
            comparison::multi_site_comparison(records)
        });
        let journal_type = step(&pb, "Journal types", || {
            comparison::journal_type_comparison(records)
        });
        let code_trends = step(&pb, "Top limitation trends", || {
            CodeTrendTable::build(records, &codes.top_codes(config.trend_top_n))
        });
        let cooccurrence = step(&pb, "Limitation co-occurrence", || {
            CooccurrenceMatrix::build(records, categories, &codes.top_codes(config.cooccurrence_top_n))
        });

        finish_progress_bar(&pb, None);
        info!("Completed {ANALYSIS_COUNT} analyses over {} studies", records.len());

        Self {
            total_studies: records.len(),
            characteristics,
            categories: category_table,
            codes,
            setting,
            region,
            trends,
            contextual_trends,
            topics,
            funding,
            urban_rural,
            multi_site,
            journal_type,
            code_trends,
            cooccurrence,
        }
    }

    /// Every table as `(file stem, JSON value)`, in analysis order
    pub fn tables(&self) -> Result<Vec<(&'static str, serde_json::Value)>> {
        use serde_json::to_value;

        Ok(vec![
            ("00_study_characteristics", to_value(&self.characteristics)?),
            ("01_limitation_categories", to_value(&self.categories)?),
            ("02_specific_limitations", to_value(&self.codes)?),
            ("03_facility_vs_community", to_value(&self.setting)?),
            ("04_regional_comparison", to_value(&self.region)?),
            ("05_trends_over_time", to_value(&self.trends)?),
            ("06_contextual_limitations_trends", to_value(&self.contextual_trends)?),
            ("07_topic_patterns", to_value(&self.topics)?),
            ("08_funding_comparison", to_value(&self.funding)?),
            ("09_urban_rural", to_value(&self.urban_rural)?),
            ("10_multi_site", to_value(&self.multi_site)?),
            ("11_journal_types", to_value(&self.journal_type)?),
            ("12_top_limitations_trends", to_value(&self.code_trends)?),
            ("13_limitation_cooccurrence", to_value(&self.cooccurrence)?),
        ])
    }

    /// Write every table plus a manifest into `dir`, creating it if needed.
    ///
    /// Returns the paths written, manifest last.
    pub fn write_tables(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        ensure_directory(dir)?;

        let mut written = Vec::new();
        let mut names = Vec::new();
        for (name, value) in self.tables()? {
            let path = dir.join(format!("{name}.json"));
            safe_write(&path, &serde_json::to_vec_pretty(&value)?)?;
            log_table_written(name, &path);
            names.push(name.to_string());
            written.push(path);
        }

        let manifest = Manifest {
            generated_at: Utc::now(),
            total_studies: self.total_studies,
            tables: names,
        };
        let path = dir.join(MANIFEST_FILE);
        safe_write(&path, &serde_json::to_vec_pretty(&manifest)?)?;
        written.push(path);

        info!("Wrote {} tables to {}", written.len() - 1, dir.display());
        Ok(written)
    }
}

fn step<T>(pb: &ProgressBar, title: &str, analysis: impl FnOnce() -> T) -> T {
    pb.set_message(title.to_string());
    debug!("Running analysis: {title}");
    let output = analysis();
    pb.inc(1);
    output
}
