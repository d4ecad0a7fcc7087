//! Error types for the persistence layer.
//!
//! Only writes can fail. Loading never surfaces an error: an unreadable
//! log is treated as empty (see [`crate::store::JsonFileStore::open`]).

use std::path::PathBuf;

/// Errors that can occur while appending to a score store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Writing or replacing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The log could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the log lock.
    #[error("Score log lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = StoreError::io(
            "/tmp/scores.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/scores.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error;

        let err = StoreError::io(
            "scores.json",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        assert!(err.source().is_some());
    }
}
