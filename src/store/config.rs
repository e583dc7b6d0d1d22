//! Storage configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a store keeps its records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Storage {
    /// Process memory only; records vanish on exit.
    #[default]
    Memory,
    /// A single bincode file, rewritten after every change.
    File(PathBuf),
}

/// Store configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backing storage.
    pub storage: Storage,

    /// Insert the example records when the store starts empty
    /// (always for memory, only on file creation for files).
    pub seed_examples: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage: Storage::Memory,
            seed_examples: true,
        }
    }
}

impl StoreConfig {
    /// Memory-backed config with example records.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed config with example records.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::default().with_file(path)
    }

    /// Create a new config backed by `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = Storage::File(path.into());
        self
    }

    /// Create a new config with seeding switched on or off.
    pub fn with_seed_examples(mut self, seed: bool) -> Self {
        self.seed_examples = seed;
        self
    }

    /// The backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.storage {
            Storage::Memory => None,
            Storage::File(path) => Some(path),
        }
    }
}
