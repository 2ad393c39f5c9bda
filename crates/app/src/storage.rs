//! Persistent store adapter.
//!
//! JSON key/value persistence with a pluggable backend: one durable
//! record per named key. The production backend writes `<key>.json`
//! files under the data directory; tests use an in-memory map.
//!
//! The adapter is deliberately forgiving. A missing, unreadable, or
//! unparseable record falls back to a caller-supplied default, and a
//! failed write is logged and swallowed - persistence problems are never
//! fatal to the storefront. Last write wins; there is no versioning.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixed storage keys for the three persisted records.
pub mod keys {
    /// Cart contents (array of cart items).
    pub const CART: &str = "auramart_cart";

    /// Current session (a single user record, or JSON `null`).
    pub const CURRENT_USER: &str = "auramart_currentUser";

    /// Full user directory (array of user records).
    pub const USERS: &str = "auramart_users";
}

/// Errors internal to the storage layer.
///
/// These never cross the adapter boundary: [`Store`] logs them and
/// substitutes defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored payload could not be deserialized.
    #[error("malformed stored value: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// A durable key/value backend holding one JSON payload per key.
pub trait StorageBackend {
    /// Read the raw payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be
    /// written (e.g. disk full, permissions).
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key under a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}

/// The persistent store adapter.
///
/// Serializes values to JSON and mirrors them into a [`StorageBackend`].
/// All failure modes are logged and absorbed here.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// Create a store over an arbitrary backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Create a file-backed store rooted at `dir`.
    #[must_use]
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileBackend::new(dir)))
    }

    /// Create an in-memory store (testing).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Load the value stored under `key`, or `default` if the record is
    /// absent, unreadable, or malformed.
    ///
    /// Failures are logged at `warn`; they never reach the caller.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let payload = match self.backend.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored value, using default");
                return default;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to parse stored value, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// Failures (e.g. disk full) are logged at `error` and swallowed.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize value for storage");
                return;
            }
        };

        if let Err(e) = self.backend.write(key, &payload) {
            tracing::error!(key, error = %e, "Failed to write stored value");
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
