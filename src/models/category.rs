//! Broad limitation categories
//!
//! Each study annotates up to five category fields. The categories fall into
//! two groups: methodological weaknesses and contextual constraints.

use std::fmt;

use serde::Serialize;

/// The five broad limitation groupings a study may annotate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitationCategory {
    /// Sampling strategy and study design
    SamplingDesign,
    /// Measurement instruments and data quality
    MeasurementData,
    /// Context, logistics, funding and time
    ContextLogistics,
    /// Analysis choices and generalizability of findings
    AnalysisGeneralizability,
    /// Research capacity of the study team
    ResearchCapacity,
}

/// Methodological vs contextual grouping of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Methodological,
    Contextual,
}

impl LimitationCategory {
    /// All categories in dataset column order
    pub const ALL: [Self; 5] = [
        Self::SamplingDesign,
        Self::MeasurementData,
        Self::ContextLogistics,
        Self::AnalysisGeneralizability,
        Self::ResearchCapacity,
    ];

    /// Position of this category in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::SamplingDesign => 0,
            Self::MeasurementData => 1,
            Self::ContextLogistics => 2,
            Self::AnalysisGeneralizability => 3,
            Self::ResearchCapacity => 4,
        }
    }

    /// Default header of the dataset column holding this category
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::SamplingDesign => "-- SAMPLING & DESIGN --",
            Self::MeasurementData => "-- MEASUREMENT & DATA --",
            Self::ContextLogistics => "-- CONTEXT & LOGISTICS --",
            Self::AnalysisGeneralizability => "-- ANALYSIS & GENERALIZABILITY --",
            Self::ResearchCapacity => "-- RESEARCH CAPACITY --",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SamplingDesign => "Sampling & Design",
            Self::MeasurementData => "Measurement & Data",
            Self::ContextLogistics => "Context & Logistics",
            Self::AnalysisGeneralizability => "Analysis & Generalizability",
            Self::ResearchCapacity => "Research Capacity",
        }
    }

    #[must_use]
    pub const fn group(self) -> CategoryGroup {
        match self {
            Self::SamplingDesign | Self::MeasurementData | Self::AnalysisGeneralizability => {
                CategoryGroup::Methodological
            }
            Self::ContextLogistics | Self::ResearchCapacity => CategoryGroup::Contextual,
        }
    }
}

impl CategoryGroup {
    /// Categories belonging to this group, in column order
    #[must_use]
    pub fn categories(self) -> Vec<LimitationCategory> {
        LimitationCategory::ALL
            .into_iter()
            .filter(|c| c.group() == self)
            .collect()
    }
}

impl fmt::Display for LimitationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
