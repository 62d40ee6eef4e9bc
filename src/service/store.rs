//! In-memory service record store.

use super::error::{StoreError, StoreResult};
use super::record::{ServiceId, ServiceRecord};
use crate::lifecycle::{can_transition, LegacyStatus, LifecycleState};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory record store using DashMap for concurrent access.
///
/// The sharded map lets any number of readers query records while writers
/// mutate individual entries, with no global lock. Suitable as the backing
/// store of a single process; it holds nothing durable.
///
/// Every state mutation goes through [`InMemoryServiceStore::advance`],
/// which refuses transitions the lifecycle machine does not allow. The
/// store never invents transitions on its own.
#[derive(Debug, Default)]
pub struct InMemoryServiceStore {
    /// Records keyed by service id
    records: DashMap<ServiceId, ServiceRecord>,
}

impl InMemoryServiceStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a new record.
    ///
    /// Returns an error if a record with the same id already exists;
    /// existing records are never silently replaced.
    pub fn insert(&self, record: ServiceRecord) -> StoreResult<()> {
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::duplicate_service(record.id)),
            Entry::Vacant(slot) => {
                tracing::debug!(service = %record.id, "service record inserted");
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Returns a copy of the record for an id.
    pub fn get(&self, id: &ServiceId) -> Option<ServiceRecord> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    /// Removes and returns the record for an id.
    pub fn remove(&self, id: &ServiceId) -> StoreResult<ServiceRecord> {
        self.records
            .remove(id)
            .map(|(_, record)| record)
            .ok_or_else(|| StoreError::service_not_found(id.clone()))
    }

    /// Returns copies of all records, sorted by id for determinism.
    pub fn list(&self) -> Vec<ServiceRecord> {
        let mut records: Vec<ServiceRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Advances a record to the given lifecycle state.
    ///
    /// The transition is checked against the record's effective state with
    /// [`can_transition`]; an illegal transition is an error and mutates
    /// nothing. On success the record's explicit lifecycle state and its
    /// `updated_at` timestamp are stamped, and the updated record is
    /// returned.
    pub fn advance(&self, id: &ServiceId, to: LifecycleState) -> StoreResult<ServiceRecord> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::service_not_found(id.clone()))?;

        let from = entry.effective_state();
        if !can_transition(from, to) {
            tracing::warn!(service = %id, %from, %to, "rejected illegal lifecycle transition");
            return Err(StoreError::invalid_transition(from, to));
        }

        entry.lifecycle_state = Some(to);
        entry.updated_at = Utc::now();
        tracing::info!(service = %id, %from, %to, "lifecycle state advanced");
        Ok(entry.value().clone())
    }

    /// Updates the coarse legacy status of a record.
    ///
    /// Kept for records still being migrated; does not touch the explicit
    /// lifecycle state.
    pub fn set_status(&self, id: &ServiceId, status: LegacyStatus) -> StoreResult<ServiceRecord> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::service_not_found(id.clone()))?;

        entry.status = status;
        entry.updated_at = Utc::now();
        tracing::debug!(service = %id, %status, "legacy status updated");
        Ok(entry.value().clone())
    }
}
