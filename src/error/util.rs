//! Utility functions for error handling
//!
//! Filesystem helpers that attach the offending path to I/O failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Open a file for reading, reporting which file and why on failure
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(AnalysisError::path_io(
            format!("File not found, needed for {purpose}"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(AnalysisError::path_io(
            format!("Expected a file for {purpose}"),
            path,
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for {purpose}"),
        };
        AnalysisError::path_io(context, path, e)
    })
}

/// Create a directory (and parents) for output, reporting the path on failure
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path)
        .map_err(|e| AnalysisError::path_io("Failed to create output directory", path, e))
}

/// Write a file, reporting the path on failure
pub fn safe_write(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| AnalysisError::path_io("Failed to write file", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = safe_open_file(Path::new("/definitely/not/here.csv"), "loading dataset")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/definitely/not/here.csv"));
        assert!(message.contains("loading dataset"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(safe_open_file(dir.path(), "loading dataset").is_err());
    }

    #[test]
    fn test_ensure_directory_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("outputs").join("tables");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_directory(&nested).unwrap();
    }
}
