use crate::domain::errors::RepositoryError;

/// Durable key-value store holding small integer lists.
///
/// `get` returns `Ok(None)` when the key has never been written.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<i64>>, RepositoryError>;
    fn set(&self, key: &str, values: &[i64]) -> Result<(), RepositoryError>;
}
