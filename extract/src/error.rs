//! Typed errors for the extraction pipelines.
//!
//! Only missing or unreadable required inputs are fatal. Parse-level
//! anomalies — unrecognized category text, categories outside the filter,
//! partial multi-preset parses — degrade to "fewer categories reported" and
//! never surface here.

use std::io;
use std::path::{Path, PathBuf};

/// Typed error for preset extraction file operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A required input file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required input path does not exist.
    #[error("missing input path: {}", .0.display())]
    MissingInput(PathBuf),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a whole file, mapping failures to [`SyncError::Read`] with the path.
pub fn read_to_string(path: &Path) -> Result<String, SyncError> {
    std::fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_to_string(Path::new("/nonexistent/weights.lua")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/weights.lua"), "{message}");
    }
}
