//! Storage errors.

use std::path::PathBuf;

/// Failure reading or writing a backing file.
#[derive(Debug, derive_more::Display)]
pub enum StoreError {
    /// Filesystem access failed.
    #[display("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file contents could not be encoded or decoded.
    #[display("{}: corrupt store file: {source}", path.display())]
    Codec {
        path: PathBuf,
        source: bincode::Error,
    },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Codec { source, .. } => Some(source),
        }
    }
}
