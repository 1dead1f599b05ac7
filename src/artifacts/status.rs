//! Read-only view of the repository for display purposes

use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepositoryState {
    /// Commit HEAD points at
    pub head: ObjectId,
    /// Snapshot tracked by the HEAD commit
    pub tracked_files: TrackedFiles,
    /// Pending changes, sorted by filename
    pub staged: BTreeMap<String, ObjectId>,
}

impl RepositoryState {
    /// Blob ID the next commit would record for a filename
    pub fn pending_oid(&self, name: &str) -> Option<&ObjectId> {
        self.staged.get(name).or_else(|| self.tracked_files.get(name))
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.staged.is_empty()
    }
}
