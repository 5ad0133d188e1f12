//! JSON file backed preference store
//!
//! Preferences live in a single JSON document:
//!
//! ```json
//! {
//!   "values": { "empire-theme": "neon" },
//!   "lastUpdated": "2026-01-01T12:00:00+00:00"
//! }
//! ```
//!
//! The default location is `~/.empire/preferences.json`.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{StorageError, StorageResult},
    store::PreferenceStore,
};

/// On-disk shape of the preference file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceFile {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    /// Last updated timestamp in RFC3339 format
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Preference store persisting to a JSON file.
///
/// Every `set` rewrites the whole file. Reads go to disk so that two processes
/// sharing a file observe each other's writes.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `~/.empire/preferences.json`
    pub fn with_default_location() -> StorageResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> StorageResult<PathBuf> {
        let mut path = dirs::home_dir().ok_or_else(|| StorageError::PathResolutionError {
            message: "Home directory not found".to_string(),
        })?;
        path.push(".empire");
        path.push("preferences.json");
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> StorageResult<PreferenceFile> {
        if !self.path.exists() {
            return Ok(PreferenceFile::default());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(PreferenceFile::default());
        }
        serde_json::from_str(&content).map_err(|e| {
            StorageError::parse_error(&self.path, format!("Failed to parse preferences: {}", e))
        })
    }

    fn write_file(&self, file: &PreferenceFile) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }
        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content).map_err(|e| StorageError::io(&self.path, e))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file = self.read_file()?;
        Ok(file.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        let mut file = self.read_file()?;
        file.values.insert(key.to_string(), value.to_string());
        file.last_updated = Some(chrono::Local::now().to_rfc3339());
        self.write_file(&file)?;
        tracing::debug!("Saved preference {} to {}", key, self.path.display());
        Ok(())
    }
}
