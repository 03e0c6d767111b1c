//! Domain models for the scoping review dataset
//!
//! A [`Dataset`] holds one [`StudyRecord`] per included study. Each record has
//! up to five [`LimitationCategory`] annotation fields plus the attributes the
//! analyses stratify by.

pub mod attributes;
pub mod category;
pub mod dataset;
pub mod study;

// Re-export commonly used types
pub use attributes::{MultiSite, Region, UrbanRural};
pub use category::{CategoryGroup, LimitationCategory};
pub use dataset::Dataset;
pub use study::StudyRecord;
