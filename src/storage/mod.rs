//! Saved game state
//!
//! A [`Storage`] keeps the snapshot of today's session and the player's
//! statistics. Two backends exist: [`MemoryStorage`] for practice games and
//! tests, and [`JsonFileStorage`] for persistent play. [`StorageBackend`] is
//! the closed choice made at startup.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::core::Attempt;
use crate::game::Statistics;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything needed to resume a session on the same day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub attempts: Vec<Attempt>,
    pub lives_remaining: usize,
    pub ended: bool,
    pub day_index: u32,
    pub won_in_hard_mode: bool,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Corrupt save data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence capability for game snapshots and statistics
pub trait Storage {
    /// Replace the stored snapshot
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;

    /// Stored snapshot, if any
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the backend cannot be read or parsed.
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;

    /// Forget the stored snapshot; statistics are kept
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StorageError>;

    /// # Errors
    /// Returns a [`StorageError`] if the backend cannot be read or parsed.
    fn load_statistics(&self) -> Result<Statistics, StorageError>;

    /// # Errors
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn save_statistics(&mut self, statistics: &Statistics) -> Result<(), StorageError>;

    /// True when the stored snapshot belongs to `day_index`
    ///
    /// Unreadable storage counts as invalid.
    fn check_validity(&self, day_index: u32) -> bool {
        matches!(self.load(), Ok(Some(snapshot)) if snapshot.day_index == day_index)
    }
}

/// Storage selected at startup
#[derive(Debug, Clone)]
pub enum StorageBackend {
    Memory(MemoryStorage),
    File(JsonFileStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryStorage::default())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(JsonFileStorage::new(path))
    }

    fn inner(&self) -> &dyn Storage {
        match self {
            Self::Memory(storage) => storage,
            Self::File(storage) => storage,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Storage {
        match self {
            Self::Memory(storage) => storage,
            Self::File(storage) => storage,
        }
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::memory()
    }
}

impl Storage for StorageBackend {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.inner_mut().save(snapshot)
    }

    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        self.inner().load()
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.inner_mut().clear()
    }

    fn load_statistics(&self) -> Result<Statistics, StorageError> {
        self.inner().load_statistics()
    }

    fn save_statistics(&mut self, statistics: &Statistics) -> Result<(), StorageError> {
        self.inner_mut().save_statistics(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn snapshot(day_index: u32) -> Snapshot {
        Snapshot {
            attempts: vec![evaluate("crane", "slate", None).unwrap()],
            lives_remaining: 5,
            ended: false,
            day_index,
            won_in_hard_mode: false,
        }
    }

    #[test]
    fn validity_follows_stored_day() {
        let mut storage = StorageBackend::memory();
        assert!(!storage.check_validity(3));

        storage.save(&snapshot(3)).unwrap();
        assert!(storage.check_validity(3));
        assert!(!storage.check_validity(4));
    }

    #[test]
    fn clear_removes_snapshot() {
        let mut storage = StorageBackend::memory();
        storage.save(&snapshot(1)).unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn snapshot_json_round_trip() {
        let original = snapshot(7);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
