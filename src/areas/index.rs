//! Staging area
//!
//! Tracks the filename to blob ID pairs that will be overlaid onto the HEAD snapshot
//! by the next commit. Entries are kept sorted by filename so snapshots and listings
//! come out in a stable order.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Pending changes mapped by filename
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pending blob ID for a filename
    pub fn entry_by_name(&self, name: &str) -> Option<&ObjectId> {
        self.entries.get(name)
    }

    /// Insert or overwrite the pending blob ID for a filename
    pub fn set(&mut self, name: &str, object_id: ObjectId) {
        tracing::debug!(file = name, oid = %object_id, "staging file");
        self.entries.insert(name.to_string(), object_id);
    }

    /// Remove a pending entry
    ///
    /// # Returns
    ///
    /// true if an entry was removed
    pub fn unset(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Remove every pending entry
    ///
    /// # Returns
    ///
    /// The number of discarded entries
    pub fn clear(&mut self) -> usize {
        let discarded = self.entries.len();
        self.entries.clear();

        discarded
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    /// Copy of the pending changes
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
