//! Empire UI Preference Storage
//!
//! A single key/value preference contract used by the theme engine to remember
//! the user's chosen theme across sessions, plus two implementations: an
//! in-memory store for tests and embedded hosts, and a JSON file store for
//! desktop hosts.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use file::{FilePreferenceStore, PreferenceFile};
pub use memory::MemoryPreferenceStore;
pub use store::PreferenceStore;
