use std::fmt::{Debug, Display};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be held by a [`RecordStore`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;
}

// =============================================================================
// 2. THE STORE
// =============================================================================

/// In-memory ordered collection keyed by [`Entity::id`].
///
/// Records keep their insertion order. Ids are unique: [`RecordStore::insert`]
/// refuses a record whose id is already present.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for RecordStore<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Entity> RecordStore<T> {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Appends `record`, handing it back if its id is taken.
    pub fn insert(&mut self, record: T) -> Result<(), T> {
        if self.contains(record.id()) {
            return Err(record);
        }
        self.records.push(record);
        Ok(())
    }

    /// Replaces the record stored under `key` in place.
    ///
    /// `record` may carry a different id than `key`. Returns false when no
    /// record matched, in which case nothing changes.
    pub fn replace(&mut self, key: &T::Id, record: T) -> bool {
        match self.records.iter_mut().find(|existing| existing.id() == key) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Clones out every record accepted by `predicate`, in store order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|record| predicate(record)).cloned().collect()
    }
}
