//! Key/value storage for the few flags that outlive a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme, sidebar and the logged-in user persist through a
//! [`PreferenceStore`]. The in-memory store backs tests and one-shot CLI
//! runs; the JSON file store is the durable local equivalent and rewrites the
//! whole file on each write (last write wins).
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a missing or undecodable value is treated as unset so
//! callers fall back to their defaults. Writes surface I/O and encoding
//! errors.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to read preferences {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("preferences file {path} is not a JSON object: {source}")]
    Malformed { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode preference: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-valued preference storage.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

/// Decode a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding or the write fails.
pub fn save_json<T: Serialize>(store: &mut dyn PreferenceStore, key: &str, value: &T) -> Result<(), PreferenceError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON FILE
// =============================================================================

/// Preferences kept as one flat JSON object of strings on disk.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Open `path`, starting empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|source| PreferenceError::Malformed { path: path.clone(), source })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PreferenceError::Read { path, source }),
        };
        debug!(path = %path.display(), keys = values.len(), "preferences loaded");
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk; callers adopt them only on success.
    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string_pretty(values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Write { path: self.path.clone(), source })?;
        }
        fs::write(&self.path, raw).map_err(|source| PreferenceError::Write { path: self.path.clone(), source })
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut next = self.values.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.flush(&next)?;
        self.values = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut next = self.values.clone();
        next.remove(key);
        self.flush(&next)?;
        self.values = next;
        Ok(())
    }
}
