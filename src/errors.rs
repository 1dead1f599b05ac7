//! Repository error kinds
//!
//! Usage errors (`Uninitialized`, `NothingToCommit`, `CommitNotFound`, `AmbiguousPrefix`)
//! leave the repository untouched. Integrity errors (`GraphIntegrity`, `BlobMissing`)
//! mean a stored reference points at nothing, which only a bug in the core can cause.

use crate::artifacts::objects::object_id::ObjectId;

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository not initialized, run 'init' first")]
    Uninitialized,

    #[error("nothing to commit, staging area is empty")]
    NothingToCommit,

    #[error("commit with id or prefix '{0}' not found")]
    CommitNotFound(String),

    #[error(
        "short commit id '{prefix}' is ambiguous\nhint: The candidates are:{}",
        format_candidates(.candidates)
    )]
    AmbiguousPrefix {
        prefix: String,
        candidates: Vec<ObjectId>,
    },

    #[error("commit {0} is referenced but missing from the commit graph")]
    GraphIntegrity(ObjectId),

    #[error("blob {0} is referenced but missing from the object store")]
    BlobMissing(ObjectId),
}

impl RepositoryError {
    /// Whether the error signals a broken internal invariant rather than a usage mistake
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::GraphIntegrity(_) | RepositoryError::BlobMissing(_)
        )
    }
}

fn format_candidates(candidates: &[ObjectId]) -> String {
    candidates
        .iter()
        .map(|oid| format!("\nhint:   {} commit", oid.to_short_oid()))
        .collect()
}
