//! Arrow data handling utilities
//!
//! Helpers for locating columns in record batches and reading their values as
//! trimmed text.

pub mod array_utils;
pub mod extractors;

// Re-export commonly used functions for convenience
pub use array_utils::{find_column, get_column, normalize_header};
pub use extractors::{StringColumn, extract_string};
