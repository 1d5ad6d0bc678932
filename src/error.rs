use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::ConfigStore`]. Nothing is retried or repaired.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Directory or file access failed.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON (or does not fit the config type).
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A document or partial update was not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl StoreError {
    /// True when the underlying failure is a missing file or directory,
    /// which is what calls before `setup` run into.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
