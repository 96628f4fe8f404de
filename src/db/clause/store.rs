use crate::{
    db::ClauseIndex,
    misc::log::targets::{self},
    structures::clause::ClauseRecord,
    types::err::{self},
};

use super::ClauseStore;

/// Methods for storing and clearing records.
impl ClauseStore {
    /// Ensures a further record may be appended without an allocation.
    ///
    /// If the directory is full, capacity is doubled and rounded up to a whole number of blocks.
    pub fn ensure_vacancy(&mut self) -> Result<(), err::ClauseStoreError> {
        let count = self.records.len();
        let capacity = self.records.capacity();
        if count < capacity {
            return Ok(());
        }

        let doubled = capacity.saturating_mul(2).max(self.block_size);
        let fresh_capacity = match doubled % self.block_size {
            0 => doubled,
            remainder => doubled.saturating_add(self.block_size - remainder),
        };

        if self.records.try_reserve_exact(fresh_capacity - count).is_err() {
            log::error!(target: targets::CLAUSE_STORE, "Failed to grow from {capacity} to {fresh_capacity} records");
            return Err(err::ClauseStoreError::Allocation);
        }

        log::trace!(target: targets::CLAUSE_STORE, "Grown from {capacity} to {} records", self.records.capacity());
        Ok(())
    }

    /// Appends a record, returning the index of the record.
    pub fn append(&mut self, record: ClauseRecord) -> Result<ClauseIndex, err::ClauseStoreError> {
        self.ensure_vacancy()?;

        let index = self.records.len();
        log::trace!(target: targets::CLAUSE_STORE, "{index}: {record}");
        self.records.push(record);

        Ok(index)
    }

    /// Drops every record and frees the directory.
    ///
    /// Safe to call on an empty store.
    pub fn clear_all(&mut self) {
        log::trace!(target: targets::CLAUSE_STORE, "Clearing {} records", self.records.len());
        self.records = Vec::new();
    }
}
