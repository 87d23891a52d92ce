use super::traits::KeyValueStore;
use crate::error::StorageError;
use crate::form::{FieldSchema, FormState};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Persists one [`FormState`] under the schema's versioned key.
///
/// Persistence is best-effort: `save` and `clear` log failures and carry on.
/// A snapshot that is not a JSON object is treated as absent; inside an
/// object, each declared field is read on its own.
#[derive(Clone)]
pub struct SnapshotStore {
    store: Arc<dyn KeyValueStore>,
    schema: Arc<FieldSchema>,
    key: &'static str,
}

impl SnapshotStore {
    pub fn new(store: Arc<dyn KeyValueStore>, schema: &FieldSchema) -> Self {
        Self {
            store,
            schema: Arc::new(schema.clone()),
            key: schema.storage_key(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn save(&self, state: &FormState) {
        if let Err(error) = self.try_save(state) {
            warn!(
                key = self.key,
                backend = self.store.name(),
                "draft not saved: {error}"
            );
        }
    }

    pub fn try_save(&self, state: &FormState) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(state).map_err(|error| StorageError::Encode(error.to_string()))?;
        self.store.set(self.key, &encoded)
    }

    pub fn load(&self) -> Option<FormState> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = self.key, "no saved draft");
                return None;
            }
            Err(error) => {
                warn!(key = self.key, "saved draft unreadable: {error}");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(object)) => Some(FormState::from_snapshot(&self.schema, &object)),
            Ok(other) => {
                warn!(key = self.key, "discarding draft that is not an object: {other}");
                None
            }
            Err(error) => {
                warn!(key = self.key, "discarding malformed draft: {error}");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(error) = self.store.remove(self.key) {
            warn!(key = self.key, "draft not cleared: {error}");
        }
    }
}
