use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use business::domain::errors::RepositoryError;
use business::domain::favorite::repository::KeyValueStore;

/// Process-local store. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, Vec<i64>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<i64>>, RepositoryError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, values: &[i64]) -> Result<(), RepositoryError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
