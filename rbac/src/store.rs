//! In-memory ordered entity collection.
//!
//! DESIGN
//! ======
//! Whole-collection replacement is the only mutation primitive: `add`,
//! `remove`, and `update_field` each build a new sequence from the old one
//! and commit it the same way [`EntityStore::replace`] does. Every
//! replacement bumps `version`, which derived views key their memoization on.
//!
//! Identifiers come from a monotonic counter and are never reused, even
//! after the record holding them has been removed. Once a record carries
//! `EntityId::MAX` the counter is exhausted and further `add`s fail.

use std::collections::BTreeSet;

use crate::entity::{EntityId, Record};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Two records in a replacement share an id.
    #[error("duplicate record id {0}")]
    DuplicateId(EntityId),
    /// No identifiers are left to allocate.
    #[error("record ids exhausted")]
    IdsExhausted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntityStore<R> {
    records: Vec<R>,
    next_id: Option<EntityId>,
    version: u64,
}

impl<R: Record> EntityStore<R> {
    /// Start from seed records; the counter resumes after the highest seeded id.
    /// A later seed record whose id is already taken is dropped.
    #[must_use]
    pub fn from_seed(records: Vec<R>) -> Self {
        let mut seen = BTreeSet::new();
        let records = records.into_iter().filter(|r| seen.insert(r.id())).collect::<Vec<_>>();
        let next_id = next_after(&records, Some(1));
        Self { records, next_id, version: 0 }
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
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
    pub fn get(&self, id: EntityId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Number of replacements applied since the store was created.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Id the next [`add`](Self::add) will assign; `None` once exhausted.
    #[must_use]
    pub fn next_id(&self) -> Option<EntityId> {
        self.next_id
    }

    /// Swap in a whole new collection.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] when two records share an id; the store
    /// is left untouched.
    pub fn replace(&mut self, records: Vec<R>) -> Result<(), StoreError> {
        if let Some(id) = first_duplicate(&records) {
            return Err(StoreError::DuplicateId(id));
        }
        self.commit(records);
        Ok(())
    }

    /// Append a record built around a freshly allocated id.
    ///
    /// # Errors
    ///
    /// [`StoreError::IdsExhausted`] when no id is left, or
    /// [`StoreError::DuplicateId`] when `build` returns a record under an id
    /// already in use.
    pub fn add(&mut self, build: impl FnOnce(EntityId) -> R) -> Result<EntityId, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        let mut next = self.records.clone();
        next.push(build(id));
        self.replace(next)?;
        Ok(id)
    }

    /// Drop the record with `id`. Returns `false` and leaves the store
    /// untouched when no record matches.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let next = self.records.iter().filter(|r| r.id() != id).cloned().collect();
        self.commit(next);
        true
    }

    /// Replace the record with `id` by `mutator(record)`; all other records
    /// are carried over unchanged. Returns `false` and leaves the store
    /// untouched when no record matches or the mutator changes the id.
    pub fn update_field(&mut self, id: EntityId, mutator: impl FnOnce(R) -> R) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return false;
        };
        let updated = mutator(self.records[index].clone());
        if updated.id() != id {
            return false;
        }
        let mut next = self.records.clone();
        next[index] = updated;
        self.commit(next);
        true
    }

    fn commit(&mut self, records: Vec<R>) {
        self.next_id = next_after(&records, self.next_id);
        self.records = records;
        self.version += 1;
    }
}

/// Smallest id above every record and at least `floor`. Exhaustion sticks.
fn next_after<R: Record>(records: &[R], floor: Option<EntityId>) -> Option<EntityId> {
    records
        .iter()
        .try_fold(floor?, |next, r| r.id().checked_add(1).map(|after| next.max(after)))
}

fn first_duplicate<R: Record>(records: &[R]) -> Option<EntityId> {
    let mut seen = BTreeSet::new();
    records.iter().map(Record::id).find(|id| !seen.insert(*id))
}
