//! In-memory preference store

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::{error::StorageResult, store::PreferenceStore};

/// Preference store backed by a shared map.
///
/// Clones share the same map, so a test can keep one handle and hand the other
/// to the engine under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.write().insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
