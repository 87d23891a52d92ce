use crate::error::StorageError;

/// String key-value medium scoped to one user, in the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Backend name (for logging)
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a key that is not stored is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
