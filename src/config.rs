//! Store configuration
//!
//! Describes where the journal database lives and how its connection is tuned.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::{DATABASE_FILENAME, DEFAULT_BUSY_TIMEOUT_MS};

/// Backing location of the journal database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreLocation {
    /// File-backed database at the given path
    File(PathBuf),
    /// Private in-memory database, discarded when the handle is dropped
    InMemory,
}

/// Connection settings for a `StorageHandle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Where the database lives
    pub location: StoreLocation,
    /// How long SQLite waits on a locked database before failing
    pub busy_timeout_ms: u64,
    /// Enable write-ahead logging
    pub wal: bool,
    /// Enforce `journals.userId -> users.id`
    pub foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: StoreLocation::InMemory,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            wal: true,
            foreign_keys: true,
        }
    }
}

impl StoreConfig {
    /// Store the database at an explicit file path
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            ..Self::default()
        }
    }

    /// Store the database as `FoodJournal.db` inside `folder`
    pub fn in_folder(folder: &Path) -> Self {
        Self::file(folder.join(DATABASE_FILENAME))
    }

    /// Use a private in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Path of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            StoreLocation::File(path) => Some(path.as_path()),
            StoreLocation::InMemory => None,
        }
    }
}
