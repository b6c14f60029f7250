use std::path::{Path, PathBuf};

/// Errors raised by the file store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A write would break a uniqueness invariant (e.g. two tracks with the
    /// same slug). `constraint` names the invariant, `uq_`-prefixed.
    #[error("Duplicate value '{value}' violates unique constraint {constraint}")]
    UniqueViolation {
        constraint: &'static str,
        value: String,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
