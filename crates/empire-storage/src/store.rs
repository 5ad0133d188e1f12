//! The preference store contract

use crate::error::StorageResult;

/// Key/value persistence for user preferences.
///
/// Implementations must be cheap to call from synchronous code; the theme
/// engine treats every call as effectively instantaneous and never retries.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
