//! Limitation reporting across publication years
//!
//! Studies whose year cannot be parsed are left out of the yearly rows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::frequency::{Share, percentage};
use crate::models::category::LimitationCategory;
use crate::models::study::StudyRecord;

/// Group studies by publication year, ascending
#[must_use]
pub fn by_year(records: &[StudyRecord]) -> BTreeMap<i32, Vec<&StudyRecord>> {
    let mut years: BTreeMap<i32, Vec<&StudyRecord>> = BTreeMap::new();
    for record in records {
        if let Some(year) = record.year() {
            years.entry(year).or_default().push(record);
        }
    }
    years
}

/// Category reporting in one publication year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrend {
    pub year: i32,
    pub total_studies: usize,
    pub analysis_generalizability_percentage: f64,
    pub context_logistics_percentage: f64,
}

/// Yearly share of studies reporting Analysis & Generalizability and Context & Logistics
#[must_use]
pub fn category_trends(records: &[StudyRecord]) -> Vec<CategoryTrend> {
    by_year(records)
        .into_iter()
        .map(|(year, studies)| {
            let total = studies.len();
            let with = |category: LimitationCategory| {
                studies.iter().filter(|r| r.has_category(category)).count()
            };
            CategoryTrend {
                year,
                total_studies: total,
                analysis_generalizability_percentage: percentage(
                    with(LimitationCategory::AnalysisGeneralizability),
                    total,
                ),
                context_logistics_percentage: percentage(
                    with(LimitationCategory::ContextLogistics),
                    total,
                ),
            }
        })
        .collect()
}

/// Reporting of one code within a year (or overall)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeShare {
    pub code: String,
    #[serde(flatten)]
    pub share: Share,
}

/// Code reporting in one publication year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeTrendRow {
    pub year: i32,
    pub total_studies: usize,
    pub codes: Vec<CodeShare>,
}

/// Yearly reporting of a fixed list of codes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeTrendTable {
    pub codes: Vec<String>,
    pub rows: Vec<CodeTrendRow>,
    /// Per code: studies summed over all years, as a share of every study
    pub totals: Vec<CodeShare>,
}

impl CodeTrendTable {
    /// Count, per year, the studies carrying each code in any category field
    #[must_use]
    pub fn build(records: &[StudyRecord], codes: &[String]) -> Self {
        let rows: Vec<CodeTrendRow> = by_year(records)
            .into_iter()
            .map(|(year, studies)| CodeTrendRow {
                year,
                total_studies: studies.len(),
                codes: codes
                    .iter()
                    .map(|code| CodeShare {
                        code: code.clone(),
                        share: Share::of(
                            studies.iter().filter(|r| r.has_code(code)).count(),
                            studies.len(),
                        ),
                    })
                    .collect(),
            })
            .collect();

        let totals = codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let count = rows.iter().map(|row| row.codes[i].share.count).sum();
                CodeShare {
                    code: code.clone(),
                    share: Share::of(count, records.len()),
                }
            })
            .collect();

        Self {
            codes: codes.to_vec(),
            rows,
            totals,
        }
    }

    /// Row for a given year
    #[must_use]
    pub fn year(&self, year: i32) -> Option<&CodeTrendRow> {
        self.rows.iter().find(|row| row.year == year)
    }
}
