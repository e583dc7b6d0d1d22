//! Load and save whole record sets.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::{Storage, StoreConfig};
use super::error::StoreError;

/// Persistence for one store's record set.
///
/// Memory backends never touch disk. File backends read the whole file
/// on `load` and replace it on `save` via a temporary sibling and rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Clone, Debug, Default)]
pub struct Backend {
    path: Option<PathBuf>,
}

impl Backend {
    /// Create a backend for the given config.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let path = match &config.storage {
            Storage::Memory => None,
            Storage::File(path) => Some(path.clone()),
        };
        Self { path }
    }

    /// Check whether records survive the process.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Read the stored record set.
    ///
    /// Returns `None` for memory backends and for files that do not exist yet.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file absent");
                return Ok(None);
            }
            Err(source) => return Err(io_error(path, source)),
        };

        let value = bincode::deserialize(&bytes).map_err(|source| StoreError::Codec {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "store loaded");
        Ok(Some(value))
    }

    /// Replace the stored record set. No-op for memory backends.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let bytes = bincode::serialize(value).map_err(|source| StoreError::Codec {
            path: path.clone(),
            source,
        })?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes).map_err(|source| io_error(&tmp, source))?;
        fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;

        debug!(path = %path.display(), bytes = bytes.len(), "store saved");
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
