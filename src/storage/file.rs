//! JSON file storage
//!
//! The snapshot and the statistics share one pretty-printed JSON document.
//! A missing file reads as an empty save. Writes go through a temporary
//! file and a rename, and a corrupt document is replaced on the next write.

use super::{Snapshot, Storage, StorageError};
use crate::game::Statistics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveFile {
    #[serde(default)]
    game: Option<Snapshot>,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SaveFile, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SaveFile::default()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn write(&self, save: &SaveFile) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let content = serde_json::to_string_pretty(save)?;
        let temp = self.path.with_extension("tmp");
        fs::write(&temp, content).map_err(|source| self.io_error(source))?;
        fs::rename(&temp, &self.path).map_err(|source| self.io_error(source))?;
        log::debug!("Saved game state to {}", self.path.display());
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut SaveFile)) -> Result<(), StorageError> {
        let mut save = match self.read() {
            Err(StorageError::Serde(err)) => {
                log::warn!("Discarding corrupt save {}: {err}", self.path.display());
                SaveFile::default()
            }
            other => other?,
        };
        change(&mut save);
        self.write(&save)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for JsonFileStorage {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.update(|save| save.game = Some(snapshot.clone()))
    }

    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.read()?.game)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.update(|save| save.game = None)
    }

    fn load_statistics(&self) -> Result<Statistics, StorageError> {
        Ok(self.read()?.statistics)
    }

    fn save_statistics(&mut self, statistics: &Statistics) -> Result<(), StorageError> {
        self.update(|save| save.statistics = statistics.clone())
    }
}
