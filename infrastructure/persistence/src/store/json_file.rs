use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use business::domain::errors::RepositoryError;
use business::domain::favorite::repository::KeyValueStore;

type Entries = BTreeMap<String, Vec<i64>>;

/// Key-value store persisted as one JSON object per file:
/// `{ "favorite_recipe_ids": [1, 7] }`.
///
/// Writes go to a sibling temporary file that is renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<Entries, RepositoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not read store");
                return Err(RepositoryError::Persistence);
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Store file is not valid JSON");
            RepositoryError::Corrupted
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                tracing::warn!(path = %parent.display(), error = %e, "Could not create store directory");
                RepositoryError::Persistence
            })?;
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(|_| RepositoryError::Persistence)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &bytes)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not write store");
                RepositoryError::Persistence
            })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<i64>>, RepositoryError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, values: &[i64]) -> Result<(), RepositoryError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(RepositoryError::Corrupted) => {
                tracing::warn!(path = %self.path.display(), "Replacing corrupted store file");
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), values.to_vec());
        self.write_entries(&entries)?;

        tracing::debug!(path = %self.path.display(), key, count = values.len(), "Stored values");
        Ok(())
    }
}
