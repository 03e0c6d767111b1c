//! Logging utilities
//!
//! Consistent messages for loading input and writing tables.

use std::path::Path;
use std::time::Duration;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a finished file operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. `loaded`
/// * `path` - File or directory operated on
/// * `batches` - Number of record batches produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, batches: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {batches} record batches from {} in {duration:?}",
            path.display()
        ),
        None => log::info!(
            "Successfully {operation} {batches} record batches from {}",
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log that an analysis table was written
pub fn log_table_written(name: &str, path: &Path) {
    log::debug!("Wrote table '{name}' to {}", path.display());
}
