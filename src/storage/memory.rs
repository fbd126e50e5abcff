//! In-process storage, lost when the program exits

use super::{Snapshot, Storage, StorageError};
use crate::game::Statistics;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    snapshot: Option<Snapshot>,
    statistics: Statistics,
}

impl Storage for MemoryStorage {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.snapshot = None;
        Ok(())
    }

    fn load_statistics(&self) -> Result<Statistics, StorageError> {
        Ok(self.statistics.clone())
    }

    fn save_statistics(&mut self, statistics: &Statistics) -> Result<(), StorageError> {
        self.statistics = statistics.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    #[test]
    fn starts_empty() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(storage.load_statistics().unwrap(), Statistics::default());
    }

    #[test]
    fn clear_keeps_statistics() {
        let mut storage = MemoryStorage::default();
        let mut stats = Statistics::default();
        stats.record_outcome(1, GameStatus::Won, 2);
        storage.save_statistics(&stats).unwrap();

        storage.clear().unwrap();
        assert_eq!(storage.load_statistics().unwrap(), stats);
    }
}
