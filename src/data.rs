//! JSON snapshot of servers and users between CLI runs.
//!
//! Without a data path every run starts from the seed data and nothing is
//! written back. A missing file is treated the same way until the first
//! save creates it.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inventory::users::{UserAccount, UserDirectory};
use inventory::{ServerRecord, ServerStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read data file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write data file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("data file {path} is malformed: {source}")]
    Malformed { path: PathBuf, source: serde_json::Error },
    #[error("data file has conflicting records: {0}")]
    Conflict(#[from] StoreError),
    #[error("failed to encode data file: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    servers: Vec<ServerRecord>,
    users: Vec<UserAccount>,
}

#[derive(Debug, Clone, Default)]
pub struct DataFile {
    path: Option<PathBuf>,
}

impl DataFile {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// # Errors
    ///
    /// Returns [`DataError`] if an existing file cannot be read or decoded,
    /// or holds two servers with the same id.
    pub fn load(&self) -> Result<(ServerStore, UserDirectory), DataError> {
        let Some(path) = &self.path else {
            return Ok((ServerStore::seeded(), UserDirectory::seeded()));
        };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok((ServerStore::seeded(), UserDirectory::seeded()));
            }
            Err(source) => return Err(DataError::Read { path: path.clone(), source }),
        };
        let snapshot: Snapshot =
            serde_json::from_str(&text).map_err(|source| DataError::Malformed { path: path.clone(), source })?;
        debug!(path = %path.display(), servers = snapshot.servers.len(), "data file loaded");
        Ok((ServerStore::new(snapshot.servers)?, UserDirectory::new(snapshot.users)))
    }

    /// No-op without a path.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Write`] on I/O failure.
    pub fn save(&self, servers: &ServerStore, users: &UserDirectory) -> Result<(), DataError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let snapshot = Snapshot { servers: servers.records().to_vec(), users: users.users().to_vec() };
        let text = serde_json::to_string_pretty(&snapshot)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| DataError::Write { path: path.clone(), source })?;
        }
        fs::write(path, text).map_err(|source| DataError::Write { path: path.clone(), source })?;
        debug!(path = %path.display(), "data file saved");
        Ok(())
    }
}
