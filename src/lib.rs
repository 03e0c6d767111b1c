//! Descriptive statistics over coded research-limitation annotations.
//!
//! Each study in a scoping-review extract carries up to five free-text
//! limitation fields of the form `CODE: note; CODE: note`. This crate loads
//! the extract, parses the fields into limitation codes, and produces
//! frequency, cross-tabulation, trend and co-occurrence tables.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{AnalysisConfig, ColumnMap};
pub use error::{AnalysisError, Result};
pub use models::{Dataset, LimitationCategory, StudyRecord};

// Core algorithms
pub use algorithm::{CodeFrequencyTable, CooccurrenceMatrix, extract_codes};

// Loading and reporting
pub use loader::{load_batches, load_dataset};
pub use report::AnalysisReport;
