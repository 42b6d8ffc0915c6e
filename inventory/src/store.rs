//! In-memory server collection with add/edit/delete.
//!
//! DESIGN
//! ======
//! The store is the only owner of records. Identifiers are assigned here
//! (one past the current maximum) and never change afterwards; edits replace
//! every other attribute and refresh `last_updated`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use time::OffsetDateTime;
use tracing::info;

use crate::record::{ServerDraft, ServerId, ServerRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("server not found: {0}")]
    NotFound(ServerId),
    #[error("duplicate server id: {0}")]
    DuplicateId(ServerId),
    #[error("no server ids left after {0}")]
    IdsExhausted(ServerId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerStore {
    records: Vec<ServerRecord>,
}

impl ServerStore {
    /// Wrap an existing collection, rejecting duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] for the first repeated id.
    pub fn new(records: Vec<ServerRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Store preloaded with the sample inventory.
    #[must_use]
    pub fn seeded() -> Self {
        Self { records: crate::seed::servers() }
    }

    #[must_use]
    pub fn records(&self) -> &[ServerRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ServerId) -> Option<&ServerRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ServerId) -> bool {
        self.get(id).is_some()
    }

    /// Identifier the next [`ServerStore::add`] will assign, or `None` once
    /// the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<ServerId> {
        let max = self.records.iter().map(|record| record.id.0).max().unwrap_or(0);
        max.checked_add(1).map(ServerId)
    }

    /// Append a new record built from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if a loaded record already holds
    /// the largest possible id.
    pub fn add(&mut self, draft: ServerDraft, now: OffsetDateTime) -> Result<ServerId, StoreError> {
        let id = self.next_id().ok_or(StoreError::IdsExhausted(ServerId(u64::MAX)))?;
        let record = draft.into_record(id, now);
        info!(%id, hostname = %record.hostname, "server added");
        self.records.push(record);
        Ok(id)
    }

    /// Replace the attributes of `id` in place, keeping its position and id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    pub fn update(&mut self, id: ServerId, draft: ServerDraft, now: OffsetDateTime) -> Result<(), StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let mut draft = draft;
        if draft.status.is_none() {
            draft.status = Some(slot.status);
        }
        *slot = draft.into_record(id, now);
        info!(%id, hostname = %slot.hostname, "server updated");
        Ok(())
    }

    /// Remove and return the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    pub fn remove(&mut self, id: ServerId) -> Result<ServerRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let record = self.records.remove(index);
        info!(%id, hostname = %record.hostname, "server removed");
        Ok(record)
    }
}
