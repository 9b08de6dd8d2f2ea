//! Record stores
//!
//! A `ContentStore` keeps one record list in memory and rewrites the whole
//! list under the record's storage key after every change. There is no merge:
//! the last writer wins.

use crate::storage::{KeyValueStore, StorageError};
use crate::types::{Record, RecordId};
use std::sync::Arc;

/// Whole-list store for one record type
pub struct ContentStore<R: Record> {
    backend: Arc<dyn KeyValueStore>,
    records: Vec<R>,
    seed_defaults: bool,
}

impl<R: Record> ContentStore<R> {
    /// Open the store and load it, seeding the built-in records if empty
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_seed(backend, true)
    }

    /// Open the store; with `seed_defaults` off the default list is empty
    pub fn with_seed(backend: Arc<dyn KeyValueStore>, seed_defaults: bool) -> Self {
        let mut store = Self {
            backend,
            records: Vec::new(),
            seed_defaults,
        };
        store.load();
        store
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Reload from the backend
    ///
    /// Never fails: a missing or malformed list is replaced by the default list,
    /// which is then persisted.
    pub fn load(&mut self) -> &[R] {
        self.records = self.read_or_seed();
        &self.records
    }

    /// Replace the whole list and persist it
    ///
    /// The in-memory list only changes once the write succeeded.
    pub fn save(&mut self, records: Vec<R>) -> Result<(), StorageError> {
        write_list(self.backend.as_ref(), &records)?;
        self.records = records;
        Ok(())
    }

    /// Append a complete record under a fresh id
    ///
    /// Returns `None` without touching the list if a required field is empty or
    /// no unused id is left.
    pub fn add(&mut self, mut record: R) -> Result<Option<RecordId>, StorageError> {
        if !record.is_complete() {
            tracing::debug!("Rejected incomplete {}", R::KIND);
            return Ok(None);
        }

        let Some(id) = next_id(&self.records, chrono::Utc::now().timestamp_millis()) else {
            tracing::warn!("No unused {} id left, rejecting add", R::KIND);
            return Ok(None);
        };
        record.set_id(id);

        let mut records = self.records.clone();
        records.push(record);
        self.save(records)?;

        tracing::info!("Added {} {}", R::KIND, id);
        Ok(Some(id))
    }

    /// Apply a single-field edit to the record with `id`
    ///
    /// Returns `false` if no record matches or the edit would make a complete
    /// record incomplete. Records that are already incomplete accept any edit.
    pub fn update(&mut self, id: RecordId, edit: R::Edit) -> Result<bool, StorageError> {
        let Some(index) = self.records.iter().position(|record| record.id() == id) else {
            return Ok(false);
        };

        let current = &self.records[index];
        let mut updated = current.clone();
        updated.apply(edit);
        if current.is_complete() && !updated.is_complete() {
            tracing::debug!("Rejected edit that would leave {} {} incomplete", R::KIND, id);
            return Ok(false);
        }

        let mut records = self.records.clone();
        records[index] = updated;
        self.save(records)?;
        Ok(true)
    }

    /// Remove the record with `id`; returns whether one was removed
    pub fn remove(&mut self, id: RecordId) -> Result<bool, StorageError> {
        let records: Vec<R> = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        if records.len() == self.records.len() {
            return Ok(false);
        }

        self.save(records)?;
        tracing::info!("Removed {} {}", R::KIND, id);
        Ok(true)
    }

    /// Drop the stored list and reload, which reseeds the defaults
    pub fn reset(&mut self) -> Result<&[R], StorageError> {
        self.backend.remove(R::STORAGE_KEY)?;
        tracing::info!("Reset stored {}s", R::KIND);
        Ok(self.load())
    }

    fn default_records(&self) -> Vec<R> {
        if self.seed_defaults {
            R::defaults()
        } else {
            Vec::new()
        }
    }

    fn read_or_seed(&self) -> Vec<R> {
        let raw = match self.backend.get(R::STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No stored {}s, seeding defaults", R::KIND);
                return self.persist_fallback();
            }
            Err(e) => {
                tracing::warn!("Failed to read stored {}s, using defaults: {}", R::KIND, e);
                return self.default_records();
            }
        };

        match decode::<R>(&raw) {
            Ok((records, migrated)) => {
                if migrated {
                    tracing::info!("Migrated stored {}s to the current shape", R::KIND);
                    if let Err(e) = write_list(self.backend.as_ref(), &records) {
                        tracing::warn!("Failed to write migrated {}s: {}", R::KIND, e);
                    }
                }
                tracing::debug!("Loaded {} {}s", records.len(), R::KIND);
                records
            }
            Err(e) => {
                tracing::warn!("Stored {}s are malformed, restoring defaults: {}", R::KIND, e);
                self.persist_fallback()
            }
        }
    }

    fn persist_fallback(&self) -> Vec<R> {
        let records = self.default_records();
        if let Err(e) = write_list(self.backend.as_ref(), &records) {
            tracing::warn!("Failed to persist default {}s: {}", R::KIND, e);
        }
        records
    }
}

fn write_list<R: Record>(backend: &dyn KeyValueStore, records: &[R]) -> Result<(), StorageError> {
    let json = serde_json::to_string(records)?;
    backend.set(R::STORAGE_KEY, &json)?;
    tracing::debug!("Saved {} {}s", records.len(), R::KIND);
    Ok(())
}

/// Parse and migrate a stored list; the flag is set when migration changed it
fn decode<R: Record>(raw: &str) -> Result<(Vec<R>, bool), serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let stored: Vec<R::Stored> = serde_json::from_value(value.clone())?;
    let records: Vec<R> = stored.into_iter().map(R::migrate).collect();
    let migrated = serde_json::to_value(&records)? != value;
    Ok((records, migrated))
}

/// Creation timestamp, bumped past every existing id so ids are never reused
///
/// `None` once the largest existing id is `RecordId::MAX`.
fn next_id<R: Record>(records: &[R], now_millis: RecordId) -> Option<RecordId> {
    let max_existing = records.iter().map(Record::id).max().unwrap_or(0);
    max_existing.checked_add(1).map(|next| now_millis.max(next))
}
